use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Tile label color
    pub tile: Color,
    /// Selected cell background
    pub selected_bg: Color,
    /// Selected cell text color
    pub selected_fg: Color,
    /// Accent color (title, active level)
    pub accent: Color,
    /// Inactive level color
    pub inactive: Color,
    /// Win banner color
    pub success: Color,
    /// Warning message color
    pub error: Color,
    /// Stats text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 15, g: 23, b: 42 },
            fg: Color::Rgb { r: 229, g: 231, b: 235 },
            border: Color::Rgb { r: 71, g: 85, b: 105 },
            tile: Color::Rgb { r: 229, g: 231, b: 235 },
            selected_bg: Color::Rgb { r: 56, g: 189, b: 248 },
            selected_fg: Color::Rgb { r: 2, g: 6, b: 23 },
            accent: Color::Rgb { r: 56, g: 189, b: 248 },
            inactive: Color::Rgb { r: 71, g: 85, b: 105 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            tile: Color::Rgb { r: 30, g: 30, b: 40 },
            selected_bg: Color::Rgb { r: 30, g: 100, b: 200 },
            selected_fg: Color::Rgb { r: 248, g: 248, b: 252 },
            accent: Color::Rgb { r: 30, g: 100, b: 200 },
            inactive: Color::Rgb { r: 130, g: 130, b: 150 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }
}
