//! The two closed vocabularies a user picks from.
//!
//! Declaration order is chooser order: `ALL[i].index() == i` for both enums, and
//! the recommendation table relies on it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSelectionError {
    #[error("unknown state `{0}` (expected one of: minimizer, destructivist, expansivist, blank)")]
    UnknownState(String),
    #[error("unknown focus `{0}` (expected one of: music, logic, art, faith, movement, beauty)")]
    UnknownFocus(String),
}

/// A self-reported emotional/cognitive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Minimizer,
    Destructivist,
    Expansivist,
    Blank,
}

impl State {
    pub const COUNT: usize = 4;

    pub const ALL: [State; Self::COUNT] = [
        State::Minimizer,
        State::Destructivist,
        State::Expansivist,
        State::Blank,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            State::Minimizer => "minimizer",
            State::Destructivist => "destructivist",
            State::Expansivist => "expansivist",
            State::Blank => "blank",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            State::Minimizer => "Minimizer",
            State::Destructivist => "Destructivist",
            State::Expansivist => "Expansivist",
            State::Blank => "Blank",
        }
    }

    /// Emoji shown ahead of the name when Unicode glyphs are enabled.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            State::Minimizer => "🧩",
            State::Destructivist => "🔥",
            State::Expansivist => "🌱",
            State::Blank => "🌫️",
        }
    }

    /// Parse a state name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimizer" => Some(State::Minimizer),
            "destructivist" => Some(State::Destructivist),
            "expansivist" => Some(State::Expansivist),
            "blank" => Some(State::Blank),
            _ => None,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for State {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseSelectionError::UnknownState(s.to_string()))
    }
}

/// A life domain the user wants a recommendation for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    Music,
    Logic,
    Art,
    Faith,
    Movement,
    Beauty,
}

impl Focus {
    pub const COUNT: usize = 6;

    pub const ALL: [Focus; Self::COUNT] = [
        Focus::Music,
        Focus::Logic,
        Focus::Art,
        Focus::Faith,
        Focus::Movement,
        Focus::Beauty,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Focus::Music => "music",
            Focus::Logic => "logic",
            Focus::Art => "art",
            Focus::Faith => "faith",
            Focus::Movement => "movement",
            Focus::Beauty => "beauty",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Focus::Music => "Music",
            Focus::Logic => "Logic",
            Focus::Art => "Art",
            Focus::Faith => "Faith",
            Focus::Movement => "Movement",
            Focus::Beauty => "Beauty",
        }
    }

    /// Parse a focus name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "music" => Some(Focus::Music),
            "logic" => Some(Focus::Logic),
            "art" => Some(Focus::Art),
            "faith" => Some(Focus::Faith),
            "movement" => Some(Focus::Movement),
            "beauty" => Some(Focus::Beauty),
            _ => None,
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Focus {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseSelectionError::UnknownFocus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_declaration_order() {
        for (i, state) in State::ALL.iter().enumerate() {
            assert_eq!(state.index(), i, "{state:?}");
        }
        for (i, focus) in Focus::ALL.iter().enumerate() {
            assert_eq!(focus.index(), i, "{focus:?}");
        }
    }

    #[test]
    fn names_round_trip_through_parse() {
        for state in State::ALL {
            assert_eq!(State::parse(state.as_str()), Some(state));
            assert_eq!(State::parse(state.display_name()), Some(state));
        }
        for focus in Focus::ALL {
            assert_eq!(Focus::parse(focus.as_str()), Some(focus));
            assert_eq!(Focus::parse(focus.display_name()), Some(focus));
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(State::parse("  MINIMIZER "), Some(State::Minimizer));
        assert_eq!(Focus::parse("Movement\n"), Some(Focus::Movement));
    }

    #[test]
    fn from_str_reports_unknown_names() {
        let err = "sleepy".parse::<State>().unwrap_err();
        assert_eq!(err, ParseSelectionError::UnknownState("sleepy".to_string()));
        assert!(err.to_string().contains("minimizer"));

        let err = "cooking".parse::<Focus>().unwrap_err();
        assert_eq!(err, ParseSelectionError::UnknownFocus("cooking".to_string()));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&State::Expansivist).unwrap();
        assert_eq!(json, "\"expansivist\"");
        let focus: Focus = serde_json::from_str("\"faith\"").unwrap();
        assert_eq!(focus, Focus::Faith);
    }

    #[test]
    fn display_uses_capitalised_name() {
        assert_eq!(State::Destructivist.to_string(), "Destructivist");
        assert_eq!(Focus::Beauty.to_string(), "Beauty");
    }
}
