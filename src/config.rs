/// How a parse that ran into problems is reported.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ParseMode {
    /// Always hand back a tree together with whatever went wrong.
    #[default]
    BestEffort,
    /// Any recorded problem fails the parse.
    Strict,
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ParseOptions {
    pub mode: ParseMode,
    /// Read the dice side case-insensitively, so `2d6` means `2D6`.
    pub case_insensitive: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self::new().with_mode(ParseMode::Strict)
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }
}
