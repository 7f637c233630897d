/// Hangman wired into the terminal engine
use crossterm::event::KeyEvent;
use rand::Rng;
use ratatui::Frame;
use tracing::error;

use crate::core::game::{Flow, Game, Renderer};

use super::error::ConfigError;
use super::keymap::{action_for_key, KeyAction};
use super::renderer::HangmanRenderer;
use super::session::Session;

pub struct HangmanApp<R> {
    session: Session<R>,
    fault: Option<ConfigError>,
}

impl<R: Rng> HangmanApp<R> {
    pub fn new(session: Session<R>) -> Self {
        Self { session, fault: None }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    /// Hand the session back, or the error that stopped the game.
    pub fn into_session(self) -> Result<Session<R>, ConfigError> {
        match self.fault {
            Some(err) => Err(err),
            None => Ok(self.session),
        }
    }
}

impl<R: Rng> Game for HangmanApp<R> {
    const TITLE: &'static str = "Hangman";

    fn handle_input(&mut self, key: KeyEvent) -> Flow {
        match action_for_key(key, self.session.state().status()) {
            Some(KeyAction::Quit) => Flow::Quit,
            Some(KeyAction::Command(command)) => match self.session.apply(command) {
                Ok(_) => Flow::Continue,
                Err(err) => {
                    error!(error = %err, ?command, "stopping game");
                    self.fault = Some(err);
                    Flow::Quit
                }
            },
            None => Flow::Continue,
        }
    }

    fn render(&self, frame: &mut Frame) {
        HangmanRenderer::render(frame, &self.session.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::{GameState, Status, WordBank, WordEntry};
    use crossterm::event::{KeyCode, KeyModifiers};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn app_on(category: &str, word: &str) -> HangmanApp<StdRng> {
        let state = GameState::with_entry(category, &WordEntry::new(word, "hint")).unwrap();
        let bank = Arc::new(WordBank::builtin());
        HangmanApp::new(Session::with_state(bank, StdRng::seed_from_u64(5), state))
    }

    fn press(app: &mut HangmanApp<StdRng>, c: char) -> Flow {
        app.handle_input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_keys_drive_session() {
        let mut app = app_on("Animals", "cat");

        for c in "tac".chars() {
            assert_eq!(press(&mut app, c), Flow::Continue);
        }
        assert_eq!(app.session().state().status(), Status::Won);

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.handle_input(enter), Flow::Continue);
        assert_eq!(app.session().state().status(), Status::InProgress);
        assert_eq!(app.session().state().category(), "Animals");
    }

    #[test]
    fn test_escape_quits_in_every_status() {
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);

        let mut app = app_on("Animals", "cat");
        assert_eq!(app.handle_input(esc), Flow::Quit);

        for c in "cat".chars() {
            press(&mut app, c);
        }
        assert_eq!(app.session().state().status(), Status::Won);
        assert_eq!(app.handle_input(esc), Flow::Quit);
    }

    #[test]
    fn test_fault_stops_game() {
        let mut app = app_on("Birds", "owl");

        let reset = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_input(reset), Flow::Quit);
        assert!(matches!(app.into_session(), Err(ConfigError::UnknownCategory(_))));
    }
}
