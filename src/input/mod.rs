// Keyboard type aliases so the rest of the crate never names crossterm
// directly.
pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::time::Duration;

/// Input events the runner cares about, decoupled from the crossterm event
/// enum so handlers never match on backend types.
#[derive(Debug)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

/// Check whether an event is available within `timeout`.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event, collapsing everything the app ignores into
/// `InputEvent::Other`. Key releases/repeats are filtered here so each press
/// triggers exactly one navigation step.
pub fn read_event() -> io::Result<InputEvent> {
    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => InputEvent::Key(key),
        Event::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::Other,
    })
}
