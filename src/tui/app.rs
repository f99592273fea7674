//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::input::{digit_position, move_cursor};
use crate::session::SessionController;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Nothing beyond a redraw.
    None,
    /// Send the current marks to the solver.
    Submit,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: SessionController,
    cursor: usize,
}

impl App {
    /// Creates a new application around a fresh controller.
    pub fn new(controller: SessionController) -> Self {
        Self {
            controller,
            cursor: 0,
        }
    }

    /// Gets the session controller.
    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    /// Gets the session controller for the event loop to drive.
    pub fn controller_mut(&mut self) -> &mut SessionController {
        &mut self.controller
    }

    /// Index of the highlighted clue box.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handles a key press.
    ///
    /// Toggles are applied directly; submission and quitting are returned to
    /// the event loop since they need the solver or the terminal.
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        debug!(?key, "Handling key");

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppAction::Quit,
            KeyCode::Enter if self.controller.can_submit() => AppAction::Submit,
            KeyCode::Char(' ') => {
                self.toggle(self.cursor);
                AppAction::None
            }
            code => {
                if let Some(position) = digit_position(code) {
                    if position < self.controller.config().word_length() {
                        self.cursor = position;
                        self.toggle(position);
                    }
                } else {
                    let len = self.controller.config().word_length();
                    self.cursor = move_cursor(self.cursor, code, len);
                }
                AppAction::None
            }
        }
    }

    fn toggle(&mut self, position: usize) {
        if let Err(e) = self.controller.toggle_mark(position) {
            debug!(error = %e, "Toggle ignored");
        }
    }
}
