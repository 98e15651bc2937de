#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub no_lower: bool,
    pub no_upper: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub exclude_similar: bool,
    pub punctuation: bool,
    pub memorable: bool,
    pub list_templates: bool,
    pub preview: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub special: Option<String>,
    pub template: Option<String>,
    pub strategy: Option<String>,
    pub score: Option<String>,
}

impl CliFlags {
    /// Flags that change what gets generated.
    pub fn changes_options(&self) -> bool {
        self.length.is_some()
            || self.no_lower
            || self.no_upper
            || self.no_digits
            || self.no_symbols
            || self.exclude_similar
            || self.punctuation
            || self.special.is_some()
    }

    /// Flags that only print information and exit.
    pub fn is_info_only(&self) -> bool {
        self.help || self.version || self.list_templates
    }
}
