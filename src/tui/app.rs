//! TUI application - event handling and state management
//!
//! The App struct owns the AppState and handles all keyboard events.
//! It does not do any rendering - that's delegated to the views module.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::state::{AppState, Field};

/// TUI application
#[derive(Debug)]
pub struct App {
    /// Application state
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance
    pub fn new() -> Self {
        debug!("App::new: called");
        Self { state: AppState::new() }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key event
    ///
    /// Returns true if the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_key: called");

        // Quit always works, even mid-request
        if matches!(
            (key.code, key.modifiers),
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _)
        ) {
            debug!("App::handle_key: quit requested");
            self.state.should_quit = true;
            return true;
        }

        // A request in flight owns the session: input is ignored and there
        // is no cancellation path
        if self.state.is_requesting() {
            debug!("App::handle_key: request in flight, ignoring input");
            return false;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Tab, _) | (KeyCode::Down, _) => {
                self.state.focus_next();
            }
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
                self.state.focus_prev();
            }
            (KeyCode::Enter, _) => {
                if self.state.focus == Field::Submit {
                    debug!("App::handle_key: submit triggered");
                    self.state.pending_submit = true;
                } else {
                    self.state.focus_next();
                }
            }
            (KeyCode::Char(' '), _) if self.state.focus == Field::FollowupToggle => {
                self.state.toggle_followup();
            }
            (KeyCode::Left, _) => {
                self.state.cycle_prev();
            }
            (KeyCode::Right, _) => {
                self.state.cycle_next();
            }
            (KeyCode::Backspace, _) => {
                self.state.backspace();
            }
            (KeyCode::PageUp, _) => {
                self.state.output_scroll = self.state.output_scroll.saturating_sub(5);
            }
            (KeyCode::PageDown, _) => {
                self.state.output_scroll = self.state.output_scroll.saturating_add(5);
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.state.insert_char(c);
            }
            _ => {}
        }

        false
    }
}
