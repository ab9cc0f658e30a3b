mod app;
mod domain;
mod input;
mod persistence;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::Theme;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "slate")]
#[command(about = "A calm, terminal-based to-do list with categories, deadlines, and search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or set the persisted theme preference
    Theme {
        /// New theme value ("dark" or "light"); omit to print the current one
        value: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Theme { value }) => {
            match value {
                Some(tag) => {
                    let theme = Theme::from_tag(&tag).ok_or_else(|| {
                        anyhow::anyhow!("Invalid theme '{}'. Use 'dark' or 'light'.", tag)
                    })?;
                    persistence::save_theme(theme)?;
                    println!("Theme set to {}", theme.to_tag());
                }
                None => {
                    println!("{}", persistence::load_theme().to_tag());
                }
            }
            Ok(())
        }
        None => run_tui(),
    }
}

fn run_tui() -> Result<()> {
    // Read the persisted theme once at startup; absent or unreadable
    // preferences default to light
    let theme = persistence::load_theme();
    let mut app = AppState::new(theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    // Poll with a timeout so overdue markers refresh without input
    let tick_rate = Duration::from_millis(500);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }
    }
}
