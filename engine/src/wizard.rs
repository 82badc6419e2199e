//! Navigation controller with screen-scoped proof tokens.
//!
//! `select_state` and `select_focus` are only meaningful on one screen each; the
//! caller must hold the matching token, which only the wizard hands out.

use tracing::{debug, error};

use kivaw_types::{Focus, Screen, State};

use crate::session::{Action, Selection, Session, TransitionError, transition};

/// Proof that the wizard was on `ChooseState` when the token was issued.
#[derive(Debug)]
pub struct StateToken(());

/// Proof that the wizard was on `ChooseFocus` when the token was issued.
#[derive(Debug)]
pub struct FocusToken(());

/// Owns the session and is its only writer.
#[derive(Debug, Default)]
pub struct Wizard {
    session: Session,
}

impl Wizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.session
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.session.selection()
    }

    #[must_use]
    pub fn recommendation(&self) -> Option<&'static str> {
        self.session.recommendation()
    }

    /// Get proof token if currently choosing a state.
    #[must_use]
    pub fn state_token(&self) -> Option<StateToken> {
        (self.screen() == Screen::ChooseState).then_some(StateToken(()))
    }

    /// Get proof token if currently choosing a focus.
    #[must_use]
    pub fn focus_token(&self) -> Option<FocusToken> {
        (self.screen() == Screen::ChooseFocus).then_some(FocusToken(()))
    }

    pub fn select_state(&mut self, _token: StateToken, state: State) {
        self.commit(Action::PickState(state));
    }

    pub fn select_focus(&mut self, _token: FocusToken, focus: Focus) {
        self.commit(Action::PickFocus(focus));
    }

    /// Apply any action, reporting actions the current screen does not offer.
    pub fn dispatch(&mut self, action: Action) -> Result<Screen, TransitionError> {
        let next = transition(self.session, action)?;
        debug!(
            from = ?self.session.screen(),
            to = ?next.screen(),
            %action,
            "Wizard transition"
        );
        self.session = next;
        Ok(next.screen())
    }

    fn commit(&mut self, action: Action) {
        if let Err(err) = self.dispatch(action) {
            // A token was held across a screen change.
            error!(%err, "Proof token used after its screen was left");
            debug_assert!(false, "{err}");
        }
    }
}
