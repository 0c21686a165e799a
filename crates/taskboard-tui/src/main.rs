//! Taskboard TUI - project entry form and status board
//!
//! The board shows:
//! - A three-field entry form (title, people, description)
//! - The active and finished project lists, re-rendered on every change
//!
//! State is memory-only and lost on exit.

use std::io;
use std::sync::Arc;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;

use taskboard_core::prelude::Config;

mod app;
mod panes;

use app::App;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let config = Config::load()?;
    let mut app = App::new(config);

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

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        // Handle input
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Log to a file when `TASKBOARD_LOG` is set; logging to the terminal
/// would corrupt the alternate screen.
fn init_logging() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("TASKBOARD_LOG") {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }
    Ok(())
}
