//! Fade-in played whenever the wizard changes screen.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

pub const SCREEN_FADE_DURATION: Duration = Duration::from_millis(220);

#[derive(Debug, Clone)]
pub struct ScreenEffect {
    timer: EffectTimer,
}

impl ScreenEffect {
    #[must_use]
    pub fn fade_in(duration: Duration) -> Self {
        Self {
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    /// Opacity in `0.0..=1.0`; 1.0 once the fade has completed.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        match self.phase() {
            AnimPhase::Running { progress } => progress,
            AnimPhase::Completed => 1.0,
        }
    }
}
