//! Event handling for the TUI

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::time::Duration;

/// Application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// No input within the poll interval
    Tick,
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Bracketed paste
    Paste(String),
    /// Terminal resize
    Resize(u16, u16),
}

impl From<CrosstermEvent> for Event {
    fn from(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Key(key) => Self::Key(key),
            CrosstermEvent::Mouse(mouse) => Self::Mouse(mouse),
            CrosstermEvent::Paste(text) => Self::Paste(text),
            CrosstermEvent::Resize(w, h) => Self::Resize(w, h),
            // Terminal focus changes only need a redraw.
            CrosstermEvent::FocusGained | CrosstermEvent::FocusLost => Self::Tick,
        }
    }
}

/// Polls the terminal for the next event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handler {
    poll_interval: Duration,
}

impl Handler {
    /// Create a handler that waits up to `poll_interval_ms` per poll
    #[must_use]
    pub const fn new(poll_interval_ms: u64) -> Self {
        Self {
            poll_interval: Duration::from_millis(poll_interval_ms),
        }
    }

    /// Wait for the next event, or [`Event::Tick`] when the interval passes
    ///
    /// # Errors
    ///
    /// Returns an error if polling or reading the terminal fails
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.poll_interval)? {
            Ok(event::read()?.into())
        } else {
            Ok(Event::Tick)
        }
    }
}
