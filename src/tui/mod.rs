//! Terminal UI for WordleBot.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction};
pub use input::{digit_position, move_cursor};
pub use ui::{draw, mark_color};

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::Duration;
use tracing::{error, info, instrument, warn};

use crate::config::SessionConfig;
use crate::session::{SessionController, SubmitDecision};
use crate::solver::Solver;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs one interactive session in the terminal.
pub async fn run_tui<S: Solver + ?Sized>(solver: &S, config: SessionConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create("wordlebot.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting WordleBot TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(SessionController::new(config));
    let res = run_session(&mut terminal, &mut app, solver).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Session loop error");
    }

    res
}

/// Event loop: load the first guess, then react to keys until quit.
#[instrument(skip_all)]
async fn run_session<S: Solver + ?Sized>(terminal: &mut Term, app: &mut App, solver: &S) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    app.controller_mut().begin_start()?;
    let result = solver.next_guess(&[]).await;
    app.controller_mut().finish_start(result)?;

    loop {
        terminal.draw(|f| draw(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            continue;
        }

        match app.handle_key(key) {
            AppAction::Quit => {
                info!("User quit");
                return Ok(());
            }
            AppAction::Submit => match app.controller_mut().begin_submit() {
                Ok(SubmitDecision::Request(pending)) => {
                    terminal.draw(|f| draw(f, app))?;
                    let result = solver.next_guess(pending.request()).await;
                    app.controller_mut().finish_submit(pending, result)?;
                }
                Ok(SubmitDecision::Exhausted) => {}
                Err(e) => warn!(error = %e, "Submit rejected"),
            },
            AppAction::None => {}
        }
    }
}
