/// Core game interface for the terminal front end
use crossterm::event::KeyEvent;
use ratatui::Frame;

/// What the host loop should do after a game has handled a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Main game trait that all terminal games implement.
/// The engine owns the loop; the game only reacts to keys and draws itself.
pub trait Game {
    /// Name used in logs
    const TITLE: &'static str;

    /// Handle a single key press
    fn handle_input(&mut self, key: KeyEvent) -> Flow;

    /// Draw the current state into the Ratatui frame
    fn render(&self, frame: &mut Frame);
}

/// Renderer trait for drawing a game's state using Ratatui
pub trait Renderer<S> {
    fn render(frame: &mut Frame, state: &S);
}
