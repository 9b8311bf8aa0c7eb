mod animations;
mod app;
mod entries;
mod game;
mod render;
mod saves;
mod theme;

use app::App;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use crossword_core::DEFAULT_GRID_SIZE;
use game::Game;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use theme::Theme;

/// Terminal crossword over a fixed clue list
#[derive(Parser)]
#[command(name = "crossword", version, about)]
struct Args {
    /// Grid dimension
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: usize,

    /// JSON entries file: [{"clue": "...", "answer": "..."}, ...]
    #[arg(long)]
    entries: Option<PathBuf>,

    /// Color theme: dark or light
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Resume the saved game instead of starting fresh
    #[arg(long)]
    resume: bool,

    /// Start with the whole solution revealed
    #[arg(long)]
    reveal: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let theme = match args.theme.as_str() {
        "light" => Theme::light(),
        _ => Theme::dark(),
    };

    // Build the game before touching the terminal so configuration
    // errors print normally.
    let game = match build_game(&args) {
        Ok(game) => game,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            std::process::exit(1);
        }
    };

    let mut app = App::new(game, theme);
    if args.reveal {
        app.game.reveal_all();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Run the app
    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn build_game(args: &Args) -> Result<Game, String> {
    if args.resume {
        if let Some(game) = saves::load() {
            return Ok(game);
        }
    }

    let entries = match &args.entries {
        Some(path) => entries::load_entries_file(path).map_err(|e| e.to_string())?,
        None => entries::builtin_entries(),
    };
    Game::new(entries, args.grid_size).map_err(|e| e.to_string())
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.get_tick_rate();

        // Render
        render::render(stdout, app)?;
        stdout.flush()?;

        // Handle input with timeout for animation updates
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            if let Event::Key(key) = event::read()? {
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    app::AppAction::Continue => {}
                    app::AppAction::Quit => break,
                }
            }
        }

        // Tick animations and timer
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
