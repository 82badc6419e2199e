/// UI configuration options derived from config/environment/flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// ASCII glyphs and plain labels instead of Unicode and emoji.
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Skip the screen fade-in.
    pub reduced_motion: bool,
}

impl UiOptions {
    /// Combine two sources; a flag enabled in either wins.
    #[must_use]
    pub fn merge(self, other: UiOptions) -> UiOptions {
        UiOptions {
            ascii_only: self.ascii_only || other.ascii_only,
            high_contrast: self.high_contrast || other.high_contrast,
            reduced_motion: self.reduced_motion || other.reduced_motion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UiOptions;

    #[test]
    fn merge_is_an_or() {
        let a = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let b = UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        };
        let merged = a.merge(b);
        assert!(merged.ascii_only);
        assert!(!merged.high_contrast);
        assert!(merged.reduced_motion);
        assert_eq!(UiOptions::default().merge(UiOptions::default()), UiOptions::default());
    }
}
