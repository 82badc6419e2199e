//! Core state machine and orchestration for Kivaw.
//!
//! [`App`] is what the TUI drives: it owns the [`Wizard`] (screen + selection),
//! the menu cursor and the view-only animation state. The navigation rules
//! themselves live in [`session`] as pure functions.

pub mod session;
mod view_state;
mod wizard;

use std::time::{Duration, Instant};

use tracing::warn;

pub use kivaw_types::ui::UiOptions;
pub use kivaw_types::{Focus, Screen, State, lookup};
pub use session::{Action, Selection, Session, TransitionError, has_back, menu_actions, transition};
pub use view_state::{MenuCursor, ViewState};
pub use wizard::{FocusToken, StateToken, Wizard};

/// Interactive session: wizard plus everything the view needs between frames.
#[derive(Debug)]
pub struct App {
    wizard: Wizard,
    view: ViewState,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        let mut view = ViewState::new(ui_options);
        view.enter_screen();
        Self {
            wizard: Wizard::new(),
            view,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    #[must_use]
    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.wizard.screen()
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.wizard.selection()
    }

    #[must_use]
    pub fn recommendation(&self) -> Option<&'static str> {
        self.wizard.recommendation()
    }

    /// Buttons on the current screen, in display order.
    #[must_use]
    pub fn menu(&self) -> Vec<Action> {
        menu_actions(self.screen())
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.view.cursor.index()
    }

    pub fn move_up(&mut self) {
        let len = self.menu().len();
        self.view.cursor.move_up(len);
    }

    pub fn move_down(&mut self) {
        let len = self.menu().len();
        self.view.cursor.move_down(len);
    }

    /// Activate the highlighted button.
    pub fn activate_selected(&mut self) {
        let index = self.selected_index();
        self.activate_index(index);
    }

    /// Activate the button at `index`. Returns false when there is no such button.
    pub fn activate_index(&mut self, index: usize) -> bool {
        let Some(action) = self.menu().get(index).copied() else {
            return false;
        };
        self.apply(action);
        true
    }

    /// Follow the back link, if the screen has one.
    pub fn back(&mut self) {
        if has_back(self.screen()) {
            self.apply(Action::Back);
        }
    }

    /// Apply an action chosen by the view. Actions the screen does not offer are
    /// a view bug; they are logged and ignored.
    pub fn apply(&mut self, action: Action) {
        if let Err(err) = self.try_apply(action) {
            warn!(%err, "Ignoring unavailable action");
        }
    }

    pub fn try_apply(&mut self, action: Action) -> Result<Screen, TransitionError> {
        let screen = self.screen();
        let unavailable = TransitionError::Unavailable { screen, action };
        match action {
            Action::PickState(state) => {
                let token = self.wizard.state_token().ok_or(unavailable)?;
                self.wizard.select_state(token, state);
            }
            Action::PickFocus(focus) => {
                let token = self.wizard.focus_token().ok_or(unavailable)?;
                self.wizard.select_focus(token, focus);
            }
            Action::Start | Action::Back | Action::ChangeFocus | Action::Home => {
                self.wizard.dispatch(action)?;
            }
        }
        self.view.enter_screen();
        Ok(self.screen())
    }

    /// Advance animations by wall-clock time since the previous tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.saturating_duration_since(self.view.last_frame);
        self.view.last_frame = now;
        self.advance(delta);
    }

    pub fn advance(&mut self, delta: Duration) {
        self.view.advance(delta);
    }

    /// Foreground opacity for the current frame, `0.0..=1.0`.
    #[must_use]
    pub fn screen_opacity(&self) -> f32 {
        self.view.opacity()
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiOptions::default())
    }
}
