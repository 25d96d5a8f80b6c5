use crate::render::TileSet;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use slide_core::{Difficulty, Engine, RecordStore, CELLS, SIDE};
use std::path::PathBuf;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Current screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Normal play
    Playing,
    /// Solved-board banner
    Won,
}

/// The main application state
pub struct App {
    /// Puzzle engine
    pub engine: Engine,
    /// Best-record store
    pub store: RecordStore,
    /// Currently selected cell index
    pub cursor: usize,
    /// Tile label display table, built once at startup
    pub tiles: TileSet,
    /// Color theme
    pub theme: Theme,
    /// Current screen
    pub screen: ScreenState,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
    /// Whether the current solved board was already recorded
    recorded: bool,
    /// Whether the last win improved the record
    pub new_record: bool,
    /// Whether the dark theme is active
    use_dark: bool,
}

impl App {
    pub fn new(level: Difficulty, seed: Option<u64>, record_file: Option<PathBuf>) -> Self {
        let engine = match seed {
            Some(seed) => Engine::with_seed(level, seed),
            None => Engine::new(level),
        };
        let path = record_file.unwrap_or_else(default_record_path);
        Self {
            engine,
            store: RecordStore::open(path),
            cursor: CELLS / 2,
            tiles: TileSet::new(),
            theme: Theme::dark(),
            screen: ScreenState::Playing,
            message: None,
            message_timer: 0,
            recorded: false,
            new_record: false,
            use_dark: true,
        }
    }

    /// Show a temporary status message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30; // ~3 seconds at the 100ms tick
    }

    /// Update timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match self.screen {
            ScreenState::Won => self.handle_won_key(key),
            ScreenState::Playing => self.handle_play_key(key),
        }
    }

    fn handle_play_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.slide(self.cursor),
            KeyCode::Char('e') => self.new_game(Difficulty::Easy),
            KeyCode::Char('m') => self.new_game(Difficulty::Medium),
            KeyCode::Char('h') => self.new_game(Difficulty::Hard),
            KeyCode::Char('n') => self.new_game(self.engine.level()),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char(c) => {
                // Digits select a cell directly: 1 is the top-left cell.
                if let Some(digit) = c.to_digit(10) {
                    if (1..=CELLS as u32).contains(&digit) {
                        let index = digit as usize - 1;
                        self.cursor = index;
                        self.slide(index);
                    }
                }
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_won_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('n') | KeyCode::Enter => self.new_game(self.engine.level()),
            KeyCode::Char('e') => self.new_game(Difficulty::Easy),
            KeyCode::Char('m') => self.new_game(Difficulty::Medium),
            KeyCode::Char('h') => self.new_game(Difficulty::Hard),
            KeyCode::Char('t') => self.toggle_theme(),
            _ => {}
        }
        AppAction::Continue
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let row = (self.cursor / SIDE) as isize + d_row;
        let col = (self.cursor % SIDE) as isize + d_col;
        if (0..SIDE as isize).contains(&row) && (0..SIDE as isize).contains(&col) {
            self.cursor = (row * SIDE as isize + col) as usize;
        }
    }

    /// Forward a cell selection to the engine
    fn slide(&mut self, index: usize) {
        let outcome = self.engine.attempt_move(index);
        if !outcome.moved {
            return; // rejected selections stay silent
        }
        if outcome.solved {
            self.on_win(outcome.state.moves);
        }
    }

    fn on_win(&mut self, moves: u32) {
        self.screen = ScreenState::Won;
        if self.recorded {
            return;
        }
        self.recorded = true;
        self.new_record = self.store.best().map_or(true, |best| moves < best);
        if let Err(err) = self.store.record_win(moves) {
            self.show_message(&format!("Record not saved: {err}"));
        }
    }

    fn new_game(&mut self, level: Difficulty) {
        self.engine.reset(level);
        self.screen = ScreenState::Playing;
        self.cursor = CELLS / 2;
        self.recorded = false;
        self.new_record = false;
    }

    fn toggle_theme(&mut self) {
        self.use_dark = !self.use_dark;
        self.theme = if self.use_dark {
            Theme::dark()
        } else {
            Theme::light()
        };
    }
}

/// Default record location under the platform data directory
pub fn default_record_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("slide_record.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use slide_core::Board;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app(name: &str) -> App {
        let path = std::env::temp_dir().join(format!(
            "slide-app-{}-{}.json",
            std::process::id(),
            name
        ));
        let _ = std::fs::remove_file(&path);
        App::new(Difficulty::Easy, Some(42), Some(path))
    }

    #[test]
    fn arrows_move_the_cursor_within_bounds() {
        let mut app = test_app("cursor");
        assert_eq!(app.cursor, 4);
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.cursor, 1);
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.cursor, 1);
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.cursor, 0);
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn digits_select_cells_directly() {
        let mut app = test_app("digits");
        // Blank in the center, so neither corner selection can slide.
        app.engine = Engine::from_board(Board::from_cells([1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap());
        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(app.cursor, 8);
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.cursor, 0);
        assert_eq!(app.engine.moves(), 0);
    }

    #[test]
    fn level_keys_reshuffle_and_reset_moves() {
        let mut app = test_app("levels");
        app.handle_key(key(KeyCode::Char('h')));
        assert_eq!(app.engine.level(), Difficulty::Hard);
        assert_eq!(app.engine.moves(), 0);
        assert_eq!(app.screen, ScreenState::Playing);
    }

    #[test]
    fn winning_move_records_once() {
        let mut app = test_app("win");
        app.engine = Engine::from_board(Board::from_cells([1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap());

        app.cursor = 0;
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.screen, ScreenState::Won);
        assert!(app.new_record);
        assert_eq!(app.store.best(), Some(1));

        // Starting over leaves the record alone.
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.screen, ScreenState::Playing);
        assert_eq!(app.store.best(), Some(1));
    }

    #[test]
    fn slower_win_keeps_the_existing_record() {
        let mut app = test_app("slower-win");
        app.engine = Engine::from_board(Board::from_cells([1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap());
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.store.best(), Some(1));

        // Start over, then play a board that takes two moves to finish.
        app.handle_key(key(KeyCode::Char('n')));
        app.engine = Engine::from_board(Board::from_cells([1, 4, 2, 3, 0, 5, 6, 7, 8]).unwrap());
        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Char('1')));

        assert_eq!(app.screen, ScreenState::Won);
        assert!(!app.new_record);
        assert_eq!(app.store.best(), Some(1));
    }

    #[test]
    fn messages_expire_after_their_timer() {
        let mut app = test_app("messages");
        app.show_message("hello");
        assert!(app.message.is_some());
        for _ in 0..30 {
            app.tick();
        }
        assert!(app.message.is_none());
    }
}
