//! View state for rendering.
//!
//! Groups the state used only to draw the wizard, separate from the session the
//! wizard owns.

use std::time::{Duration, Instant};

use kivaw_types::ui::{AnimPhase, SCREEN_FADE_DURATION, ScreenEffect, UiOptions};

/// Highlighted row on the current screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuCursor {
    index: usize,
}

impl MenuCursor {
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = if self.index == 0 {
            len - 1
        } else {
            self.index.min(len) - 1
        };
    }

    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }
}

#[derive(Debug)]
pub struct ViewState {
    pub cursor: MenuCursor,
    /// Active screen fade-in.
    pub screen_effect: Option<ScreenEffect>,
    pub ui_options: UiOptions,
    /// Timestamp of last frame (for animation timing).
    pub last_frame: Instant,
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            cursor: MenuCursor::default(),
            screen_effect: None,
            ui_options,
            last_frame: Instant::now(),
        }
    }

    /// Called on every screen change.
    pub fn enter_screen(&mut self) {
        self.cursor.reset();
        self.screen_effect = if self.ui_options.reduced_motion {
            None
        } else {
            Some(ScreenEffect::fade_in(SCREEN_FADE_DURATION))
        };
    }

    pub fn advance(&mut self, delta: Duration) {
        if let Some(effect) = self.screen_effect.as_mut() {
            effect.advance(delta);
            if effect.phase() == AnimPhase::Completed {
                self.screen_effect = None;
            }
        }
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.screen_effect.as_ref().map_or(1.0, ScreenEffect::opacity)
    }
}
