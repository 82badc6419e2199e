//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod options;
mod screen_effect;

pub use animation::AnimPhase;
pub use options::UiOptions;
pub use screen_effect::{SCREEN_FADE_DURATION, ScreenEffect};
