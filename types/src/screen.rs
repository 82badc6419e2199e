/// Current position in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    ChooseState,
    ChooseFocus,
    Result,
}

impl Screen {
    /// Short label for the status bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Screen::Home => "HOME",
            Screen::ChooseState => "STATE",
            Screen::ChooseFocus => "FOCUS",
            Screen::Result => "MATCH",
        }
    }

    /// Position in the wizard for the progress indicator; `Home` is step 0.
    #[must_use]
    pub const fn step(self) -> u8 {
        match self {
            Screen::Home => 0,
            Screen::ChooseState => 1,
            Screen::ChooseFocus => 2,
            Screen::Result => 3,
        }
    }
}
