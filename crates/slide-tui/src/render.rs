use crate::app::{App, ScreenState};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use slide_core::{Difficulty, BLANK, CELLS, SIDE};
use std::io;

/// Display glyphs for each tile label, built once at startup. Label 0 is
/// the blank. A graphical frontend would hold cropped image tiles in a
/// table like this instead; the engine only ever sees the labels.
pub struct TileSet {
    glyphs: [char; CELLS],
}

impl TileSet {
    pub fn new() -> Self {
        Self {
            glyphs: std::array::from_fn(|label| {
                if label == BLANK as usize {
                    ' '
                } else {
                    char::from_digit(label as u32, 10).unwrap_or('?')
                }
            }),
        }
    }

    pub fn glyph(&self, label: u8) -> char {
        self.glyphs[label as usize]
    }
}

impl Default for TileSet {
    fn default() -> Self {
        Self::new()
    }
}

// "+-----+-----+-----+" is 19 chars wide; cells are 5 wide, 1 tall.
const GRID_WIDTH: u16 = 19;
const GRID_TOP: u16 = 5;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, _term_height) = terminal::size()?;
    let theme = &app.theme;

    execute!(
        stdout,
        Hide,
        SetBackgroundColor(theme.bg),
        Clear(ClearType::All)
    )?;

    print_centered(stdout, term_width, 1, theme.accent, theme.bg, "Slide Puzzle")?;

    let best = match app.store.best() {
        Some(best) => best.to_string(),
        None => "-".to_string(),
    };
    let stats = format!("Moves: {}    Best: {}", app.engine.moves(), best);
    print_centered(stdout, term_width, 2, theme.info, theme.bg, &stats)?;

    render_levels(stdout, app, term_width, 3)?;

    let grid_x = centered_x(term_width, GRID_WIDTH as usize);
    render_grid(stdout, app, grid_x, GRID_TOP)?;

    let below = GRID_TOP + SIDE as u16 * 2 + 2;
    match app.screen {
        ScreenState::Playing => {
            print_centered(
                stdout,
                term_width,
                below,
                theme.key,
                theme.bg,
                "arrows/1-9 select   enter slide   e/m/h level   n new   t theme   q quit",
            )?;
        }
        ScreenState::Won => render_win_banner(stdout, app, term_width, below)?,
    }

    if let Some(ref msg) = app.message {
        print_centered(stdout, term_width, below + 5, theme.error, theme.bg, msg)?;
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_levels(stdout: &mut io::Stdout, app: &App, term_width: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let labels: Vec<String> = Difficulty::ALL.iter().map(|l| l.to_string()).collect();
    let total = labels.iter().map(|l| l.len()).sum::<usize>() + 3 * (labels.len() - 1);

    let mut x = centered_x(term_width, total);
    for (level, label) in Difficulty::ALL.into_iter().zip(&labels) {
        let color = if level == app.engine.level() {
            theme.accent
        } else {
            theme.inactive
        };
        execute!(
            stdout,
            MoveTo(x, y),
            SetForegroundColor(color),
            SetBackgroundColor(theme.bg),
            Print(label)
        )?;
        x += label.len() as u16 + 3;
    }
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let border = "+-----+-----+-----+";

    for row in 0..SIDE {
        let border_y = y + row as u16 * 2;
        execute!(
            stdout,
            MoveTo(x, border_y),
            SetForegroundColor(theme.border),
            SetBackgroundColor(theme.bg),
            Print(border)
        )?;

        execute!(stdout, MoveTo(x, border_y + 1))?;
        for col in 0..SIDE {
            execute!(
                stdout,
                SetForegroundColor(theme.border),
                SetBackgroundColor(theme.bg),
                Print("|")
            )?;

            let index = row * SIDE + col;
            let label = app.engine.board().tile(index);
            let selected = index == app.cursor && app.screen == ScreenState::Playing;
            let (fg, bg) = if selected {
                (theme.selected_fg, theme.selected_bg)
            } else {
                (theme.tile, theme.bg)
            };
            execute!(
                stdout,
                SetForegroundColor(fg),
                SetBackgroundColor(bg),
                Print(format!("  {}  ", app.tiles.glyph(label)))
            )?;
        }
        execute!(
            stdout,
            SetForegroundColor(theme.border),
            SetBackgroundColor(theme.bg),
            Print("|")
        )?;
    }

    execute!(
        stdout,
        MoveTo(x, y + SIDE as u16 * 2),
        SetForegroundColor(theme.border),
        SetBackgroundColor(theme.bg),
        Print(border)
    )?;
    Ok(())
}

fn render_win_banner(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    y: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    print_centered(stdout, term_width, y, theme.success, theme.bg, "Puzzle solved!")?;

    let summary = format!(
        "Level: {}    Moves: {}",
        app.engine.level(),
        app.engine.moves()
    );
    print_centered(stdout, term_width, y + 1, theme.fg, theme.bg, &summary)?;

    let mut next = y + 2;
    if app.new_record {
        print_centered(stdout, term_width, next, theme.accent, theme.bg, "New record!")?;
        next += 1;
    }
    print_centered(
        stdout,
        term_width,
        next,
        theme.key,
        theme.bg,
        "n play again   e/m/h new level   q quit",
    )?;
    Ok(())
}

fn centered_x(term_width: u16, len: usize) -> u16 {
    let len = len as u16;
    if term_width > len {
        (term_width - len) / 2
    } else {
        0
    }
}

fn print_centered(
    stdout: &mut io::Stdout,
    term_width: u16,
    y: u16,
    fg: Color,
    bg: Color,
    text: &str,
) -> io::Result<()> {
    let x = centered_x(term_width, text.chars().count());
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(fg),
        SetBackgroundColor(bg),
        Print(text)
    )
}
