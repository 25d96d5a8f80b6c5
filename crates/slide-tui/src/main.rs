mod app;
mod render;
mod theme;

use app::{App, AppAction};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use slide_core::Difficulty;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "slide", about = "Sliding-tile puzzle in the terminal")]
struct Args {
    /// Starting difficulty
    #[arg(short, long, value_enum, default_value = "easy")]
    level: LevelArg,
    /// Seed for the shuffle RNG (reproducible boards)
    #[arg(long)]
    seed: Option<u64>,
    /// Record file path (defaults to the platform data directory)
    #[arg(long)]
    record_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    Easy,
    Medium,
    Hard,
}

impl From<LevelArg> for Difficulty {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Easy => Difficulty::Easy,
            LevelArg::Medium => Difficulty::Medium,
            LevelArg::Hard => Difficulty::Hard,
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the app
    let result = run_app(&mut stdout, args);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, args: Args) -> io::Result<()> {
    let mut app = App::new(args.level.into(), args.seed, args.record_file);
    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(100);

    loop {
        // Render
        render::render(stdout, &app)?;
        stdout.flush()?;

        // Handle input with a timeout so message timers keep running
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    AppAction::Continue => {}
                    AppAction::Quit => break,
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
