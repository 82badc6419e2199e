//! The fixed (State, Focus) -> text table.

use crate::{Focus, NonEmptyStaticStr, State};

/// Total mapping from every (State, Focus) pair to a pre-authored recommendation.
///
/// Built during const evaluation: row `i` holds `State::ALL[i]` and column `j`
/// holds `Focus::ALL[j]`. An empty entry fails the build.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationTable {
    rows: [[NonEmptyStaticStr; Focus::COUNT]; State::COUNT],
}

/// The process-wide table.
pub const TABLE: RecommendationTable = RecommendationTable::build();

/// Recommendation text for a (state, focus) pair.
#[must_use]
pub fn lookup(state: State, focus: Focus) -> &'static str {
    TABLE.get(state, focus)
}

impl RecommendationTable {
    const fn build() -> Self {
        let s = State::ALL;
        Self {
            rows: [row(s[0]), row(s[1]), row(s[2]), row(s[3])],
        }
    }

    #[must_use]
    pub const fn get(&self, state: State, focus: Focus) -> &'static str {
        self.rows[state.index()][focus.index()].as_str()
    }

    /// Every entry in chooser order: states outer, focuses inner.
    pub fn entries(&self) -> impl Iterator<Item = (State, Focus, &'static str)> + '_ {
        State::ALL.into_iter().flat_map(move |state| {
            Focus::ALL
                .into_iter()
                .map(move |focus| (state, focus, self.get(state, focus)))
        })
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        State::COUNT * Focus::COUNT
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

const fn row(state: State) -> [NonEmptyStaticStr; Focus::COUNT] {
    let f = Focus::ALL;
    [
        authored(state, f[0]),
        authored(state, f[1]),
        authored(state, f[2]),
        authored(state, f[3]),
        authored(state, f[4]),
        authored(state, f[5]),
    ]
}

const fn authored(state: State, focus: Focus) -> NonEmptyStaticStr {
    let text = match (state, focus) {
        (State::Minimizer, Focus::Music) => {
            "Minimal or instrumental tracks that support calm focus."
        }
        (State::Minimizer, Focus::Logic) => {
            "Clear, structured content that reduces noise and helps you think efficiently."
        }
        (State::Minimizer, Focus::Art) => "Clean visuals with soft contrast and space.",
        (State::Minimizer, Focus::Faith) => "Quiet reflection and grounding presence.",
        (State::Minimizer, Focus::Movement) => {
            "Slow, intentional movement like walking or stretching."
        }
        (State::Minimizer, Focus::Beauty) => "Neutral tones and subtle elegance.",

        (State::Destructivist, Focus::Music) => "Cathartic or intense sound.",
        (State::Destructivist, Focus::Logic) => "Breaking old patterns and mental resets.",
        (State::Destructivist, Focus::Art) => "Raw or abstract visuals.",
        (State::Destructivist, Focus::Faith) => "Deep reflection and release.",
        (State::Destructivist, Focus::Movement) => "Strong physical release.",
        (State::Destructivist, Focus::Beauty) => "Unconventional, striking beauty.",

        (State::Expansivist, Focus::Music) => "Energetic or atmospheric sound.",
        (State::Expansivist, Focus::Logic) => "Big-picture ideas and mental exploration.",
        (State::Expansivist, Focus::Art) => "Bold colors and expressive visuals.",
        (State::Expansivist, Focus::Faith) => "Purpose-driven reflection.",
        (State::Expansivist, Focus::Movement) => "Dynamic movement or dance.",
        (State::Expansivist, Focus::Beauty) => "Expressive, radiant aesthetics.",

        (State::Blank, Focus::Music) => "Soft ambient sounds.",
        (State::Blank, Focus::Logic) => "Gentle mental clarity.",
        (State::Blank, Focus::Art) => "Open-ended, calming visuals.",
        (State::Blank, Focus::Faith) => "Quiet grounding.",
        (State::Blank, Focus::Movement) => "Light motion or rest.",
        (State::Blank, Focus::Beauty) => "Clean and simple design.",
    };
    NonEmptyStaticStr::new(text)
}
