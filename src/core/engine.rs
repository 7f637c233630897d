use crate::core::game::{Flow, Game};
use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tracing::{debug, info};

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Draws and dispatches key presses until the game quits, the event stream
    /// ends or the process receives Ctrl-C.
    /// Terminal setup and restore stay with the caller.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> Result<G> {
        info!(game = G::TITLE, "engine started");
        let mut events = EventStream::new();

        loop {
            terminal.draw(|f| self.game.render(f))?;

            tokio::select! {
                maybe_event = events.next() => {
                    let Some(event) = maybe_event else { break };
                    match event? {
                        // Windows reports releases too
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if self.game.handle_input(key) == Flow::Quit {
                                break;
                            }
                        }
                        Event::Resize(width, height) => debug!(width, height, "terminal resized"),
                        _ => {}
                    }
                }

                _ = tokio::signal::ctrl_c() => {
                    info!("interrupted");
                    break;
                }
            }
        }

        info!(game = G::TITLE, "engine stopped");
        Ok(self.game)
    }
}
