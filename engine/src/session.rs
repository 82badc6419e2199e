//! Screen-navigation state machine.
//!
//! ```text
//!   Home --Start--> ChooseState --PickState(s)--> ChooseFocus --PickFocus(f)--> Result
//!    ^                  |   ^                         |   ^                        |
//!    +-------Back-------+   +----------Back-----------+   +--Back | ChangeFocus----+
//!    ^                                                                             |
//!    +---------------------------Home (clears the selection)----------------------+
//! ```
//!
//! Transitions are a pure function of `(Session, Action)`. Everything the view
//! needs to render is in the returned `Session`.

use std::fmt;

use thiserror::Error;

use kivaw_types::{Focus, Screen, State, lookup};

/// The user's picks so far. Only the Result -> Home transition clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub state: Option<State>,
    pub focus: Option<Focus>,
}

impl Selection {
    #[must_use]
    pub fn pair(&self) -> Option<(State, Focus)> {
        Some((self.state?, self.focus?))
    }

    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.state.is_none() && self.focus.is_none()
    }
}

/// Current screen plus selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    screen: Screen,
    selection: Selection,
}

impl Session {
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Text for the result screen; `None` on every other screen.
    #[must_use]
    pub fn recommendation(&self) -> Option<&'static str> {
        if self.screen != Screen::Result {
            return None;
        }
        self.selection
            .pair()
            .map(|(state, focus)| lookup(state, focus))
    }
}

/// Everything a user can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    PickState(State),
    PickFocus(Focus),
    Back,
    ChangeFocus,
    Home,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Start => f.write_str("start"),
            Action::PickState(state) => write!(f, "pick state {}", state.as_str()),
            Action::PickFocus(focus) => write!(f, "pick focus {}", focus.as_str()),
            Action::Back => f.write_str("back"),
            Action::ChangeFocus => f.write_str("change focus"),
            Action::Home => f.write_str("home"),
        }
    }
}

/// An action offered on the wrong screen: a view-layer bug, not user error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("`{action}` is not available on the {screen:?} screen")]
    Unavailable { screen: Screen, action: Action },
}

/// Compute the session that follows `action`.
pub fn transition(session: Session, action: Action) -> Result<Session, TransitionError> {
    let Session {
        screen,
        mut selection,
    } = session;

    let next = match (screen, action) {
        (Screen::Home, Action::Start) => Screen::ChooseState,
        (Screen::ChooseState, Action::PickState(state)) => {
            selection.state = Some(state);
            Screen::ChooseFocus
        }
        (Screen::ChooseState, Action::Back) => Screen::Home,
        (Screen::ChooseFocus, Action::PickFocus(focus)) => {
            selection.focus = Some(focus);
            Screen::Result
        }
        (Screen::ChooseFocus, Action::Back) => Screen::ChooseState,
        // The previous focus is kept until a new one is picked.
        (Screen::Result, Action::ChangeFocus | Action::Back) => Screen::ChooseFocus,
        (Screen::Result, Action::Home) => {
            selection = Selection::default();
            Screen::Home
        }
        _ => return Err(TransitionError::Unavailable { screen, action }),
    };

    Ok(Session {
        screen: next,
        selection,
    })
}

/// Rows a screen offers as buttons, in display order.
#[must_use]
pub fn menu_actions(screen: Screen) -> Vec<Action> {
    match screen {
        Screen::Home => vec![Action::Start],
        Screen::ChooseState => State::ALL.into_iter().map(Action::PickState).collect(),
        Screen::ChooseFocus => Focus::ALL.into_iter().map(Action::PickFocus).collect(),
        Screen::Result => vec![Action::ChangeFocus, Action::Home],
    }
}

/// Whether the screen shows a back link.
#[must_use]
pub fn has_back(screen: Screen) -> bool {
    !matches!(screen, Screen::Home)
}
