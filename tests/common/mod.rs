//! Shared test utilities and fixtures

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use kivaw_engine::{App, UiOptions};
use kivaw_tui::apply_event;

/// An app with the fade disabled, so every frame is fully drawn.
pub fn still_app() -> App {
    App::new(UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    })
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Feed key presses through the same path the event loop uses.
pub fn type_keys(app: &mut App, codes: &[KeyCode]) {
    for code in codes {
        apply_event(app, key(*code));
    }
}

pub fn digit(n: u8) -> KeyCode {
    KeyCode::Char(char::from(b'0' + n))
}
