//! Mutable front-end state: the current options and the last password.
//!
//! The core modules are stateless; a `Session` remembers what the user has
//! selected, forwards each UI event to them and hands back what the
//! presentation layer should show.

use std::ops::RangeInclusive;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{ClipboardError, GenerateError, TemplateError};
use crate::pass::charset::{Alphabet, CharClass, ClassSelection, SymbolSet};
use crate::pass::{self, Password};
use crate::settings::Settings;
use crate::strength::{self, Assessment, Strategy};
use crate::templates::{self, GenerationMode, PLACEHOLDER};

/// Accepted password lengths.
pub const LENGTH_RANGE: RangeInclusive<usize> = 4..=128;

/// How long a notice stays on screen.
pub const NOTICE_TIMEOUT: Duration = Duration::from_millis(2200);

/// Clipboard write access.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

pub struct Session<C: Clipboard> {
    selection: ClassSelection,
    length: usize,
    symbols: SymbolSet,
    strategy: Strategy,
    template: usize,
    mode: GenerationMode,
    password: Option<Password>,
    assessment: Assessment,
    /// The assessment scores `password` rather than a preview or template.
    scored: bool,
    auto_copy: bool,
    copy_enabled: bool,
    clipboard: C,
}

impl<C: Clipboard> Session<C> {
    pub fn new(settings: &Settings, clipboard: C) -> Self {
        let mut session = Self {
            selection: settings.selection(),
            length: clamp_length(settings.pass_length),
            symbols: settings.symbol_set.clone(),
            strategy: settings.strategy,
            template: PLACEHOLDER,
            mode: GenerationMode::Standard,
            password: None,
            assessment: Assessment::neutral(""),
            scored: false,
            auto_copy: settings.auto_copy,
            copy_enabled: true,
            clipboard,
        };
        if settings.template != PLACEHOLDER {
            if let Err(e) = session.select_template(settings.template) {
                warn!("saved template ignored: {e}");
            }
        } else {
            session.refresh_preview();
        }
        session
    }

    pub fn selection(&self) -> ClassSelection {
        self.selection
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn template(&self) -> usize {
        self.template
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    pub fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    pub fn assessment(&self) -> Assessment {
        self.assessment
    }

    pub fn auto_copy(&self) -> bool {
        self.auto_copy
    }

    pub fn copy_enabled(&self) -> bool {
        self.copy_enabled && self.password.is_some()
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }

    /// The alphabet the next standard generation would draw from.
    pub fn alphabet(&self) -> Alphabet {
        Alphabet::build_with(&self.selection, &self.symbols)
    }

    /// Whether the generate action should be enabled.
    pub fn can_generate(&self) -> bool {
        match self.mode {
            GenerationMode::Memorable => true,
            GenerationMode::Pin { .. } => true,
            GenerationMode::Standard => !self.alphabet().is_empty(),
        }
    }

    pub fn set_selection(&mut self, selection: ClassSelection) {
        self.selection = selection;
        self.options_changed();
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.selection.toggle(class);
        self.options_changed();
    }

    pub fn set_exclude_similar(&mut self, exclude: bool) {
        self.selection.exclude_similar = exclude;
        self.options_changed();
    }

    /// Set the length, clamped to [`LENGTH_RANGE`]. Returns the value kept.
    pub fn set_length(&mut self, length: usize) -> usize {
        self.length = clamp_length(length);
        self.options_changed();
        self.length
    }

    pub fn set_symbols(&mut self, symbols: SymbolSet) {
        self.symbols = symbols;
        self.options_changed();
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
        if let Some(password) = self.password.as_ref().filter(|_| self.scored) {
            self.assessment = strength::assess_password(strategy, password.as_str());
        }
    }

    pub fn set_auto_copy(&mut self, auto_copy: bool) {
        self.auto_copy = auto_copy;
    }

    /// Apply a catalog entry. Its expected assessment is shown until the
    /// next generation.
    pub fn select_template(&mut self, index: usize) -> Result<Notice, TemplateError> {
        let app = templates::apply(index)?;
        self.template = index;
        self.scored = false;
        if !app.actionable {
            self.mode = GenerationMode::Standard;
            self.assessment = app.assessment;
            self.copy_enabled = false;
            return Ok(Notice::info("Template cleared"));
        }
        self.selection = app.selection;
        self.length = app.length;
        self.mode = app.mode;
        self.assessment = app.assessment;
        Ok(Notice::info(format!(
            "Template: {}",
            templates::CATALOG[index].name
        )))
    }

    /// Produce a new password for the current options.
    ///
    /// On failure the previous password stays in place and a warning notice
    /// comes back instead.
    pub fn generate(&mut self) -> Notice {
        let password = match self.draw() {
            Ok(password) => password,
            Err(e) => {
                warn!("generation rejected: {e}");
                return Notice::warning(e.to_string());
            }
        };

        self.assessment = strength::assess_password(self.strategy, password.as_str());
        self.password = Some(password);
        self.scored = true;
        self.copy_enabled = true;
        debug!(score = self.assessment.score, label = self.assessment.label, "scored");

        if self.auto_copy {
            return match self.copy() {
                n if n.level == NoticeLevel::Info => {
                    Notice::info("Password generated and copied")
                }
                n => n,
            };
        }
        Notice::info("Password generated")
    }

    /// Write the current password to the clipboard.
    pub fn copy(&mut self) -> Notice {
        let Some(password) = self.password.as_ref().filter(|_| self.copy_enabled) else {
            return Notice::warning("Generate a password first");
        };
        match self.clipboard.set_text(password.as_str()) {
            Ok(()) => Notice::info("Password copied"),
            Err(e) => Notice::error(e.to_string()),
        }
    }

    fn draw(&self) -> Result<Password, GenerateError> {
        match self.mode {
            GenerationMode::Memorable => Ok(pass::generate_memorable()),
            GenerationMode::Pin { length } => {
                let alphabet = Alphabet::build_checked(&self.selection, &self.symbols)?;
                let password = pass::generate(&alphabet, self.length)?;
                templates::enforce_pin(password, length)
            }
            GenerationMode::Standard => {
                let alphabet = Alphabet::build_checked(&self.selection, &self.symbols)?;
                pass::generate(&alphabet, self.length)
            }
        }
    }

    fn options_changed(&mut self) {
        self.template = PLACEHOLDER;
        self.mode = GenerationMode::Standard;
        self.scored = false;
        self.refresh_preview();
    }

    fn refresh_preview(&mut self) {
        self.assessment = strength::assess_selection(&self.selection, self.length);
    }
}

fn clamp_length(length: usize) -> usize {
    length.clamp(*LENGTH_RANGE.start(), *LENGTH_RANGE.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Memory(Option<String>);

    impl Clipboard for Memory {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0 = Some(text.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl Clipboard for Broken {
        fn set_text(&mut self, _: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError("no display".to_string()))
        }
    }

    fn session() -> Session<Memory> {
        Session::new(&Settings::default(), Memory::default())
    }

    #[test]
    fn test_initial_preview() {
        let s = session();
        assert_eq!(s.length(), 20);
        assert_eq!(s.assessment().score, 100);
        assert!(s.can_generate());
        assert!(!s.copy_enabled());
    }

    #[test]
    fn test_length_is_clamped() {
        let mut s = session();
        assert_eq!(s.set_length(1), 4);
        assert_eq!(s.set_length(500), 128);
        assert_eq!(s.set_length(33), 33);
    }

    #[test]
    fn test_empty_selection_keeps_previous_password() {
        let mut s = session();
        assert_eq!(s.generate().level, NoticeLevel::Info);
        let before = s.password().cloned();

        s.set_selection(ClassSelection::new(false, false, false, false, false));
        assert!(!s.can_generate());
        let notice = s.generate();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.text.contains("at least one"));
        assert_eq!(s.password().cloned(), before);
    }

    #[test]
    fn test_toggle_updates_preview() {
        let mut s = session();
        s.set_length(12);
        let full = s.assessment().score;
        s.toggle(CharClass::Symbol);
        assert!(s.assessment().score < full);
        assert!(!s.selection().symbols);
    }

    #[test]
    fn test_copy_requires_password() {
        let mut s = session();
        assert_eq!(s.copy().level, NoticeLevel::Warning);
        s.generate();
        assert_eq!(s.copy().level, NoticeLevel::Info);
        assert_eq!(
            s.clipboard().0.as_deref(),
            s.password().map(|p| p.as_str())
        );
    }

    #[test]
    fn test_auto_copy() {
        let settings = Settings {
            auto_copy: true,
            ..Settings::default()
        };
        let mut s = Session::new(&settings, Memory::default());
        let notice = s.generate();
        assert_eq!(notice.text, "Password generated and copied");
        assert!(s.clipboard().0.is_some());
    }

    #[test]
    fn test_clipboard_failure_is_reported() {
        let mut s = Session::new(&Settings::default(), Broken);
        s.generate();
        let notice = s.copy();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.text.contains("no display"));
    }

    #[test]
    fn test_template_shows_expected_until_generated() {
        let mut s = session();
        s.select_template(templates::find("wifi").unwrap()).unwrap();
        assert_eq!(s.assessment().label, "Good");
        assert_eq!(s.length(), 20);
        assert!(s.selection().exclude_similar);

        s.generate();
        let password = s.password().unwrap().as_str().to_string();
        assert_eq!(
            s.assessment(),
            strength::assess_password(Strategy::PerCharacterAnalysis, &password)
        );
    }

    #[test]
    fn test_placeholder_disables_copy() {
        let mut s = session();
        s.generate();
        assert!(s.copy_enabled());
        s.select_template(PLACEHOLDER).unwrap();
        assert!(!s.copy_enabled());
        assert_eq!(s.assessment().score, 0);
        assert_eq!(s.copy().level, NoticeLevel::Warning);
    }

    #[test]
    fn test_manual_change_leaves_template() {
        let mut s = session();
        s.select_template(templates::find("memorable").unwrap()).unwrap();
        assert_eq!(s.mode(), GenerationMode::Memorable);
        s.set_length(30);
        assert_eq!(s.mode(), GenerationMode::Standard);
        assert_eq!(s.template(), PLACEHOLDER);
    }

    #[test]
    fn test_strategy_switch_keeps_template_assessment() {
        let mut s = session();
        s.generate();
        s.select_template(templates::find("wifi").unwrap()).unwrap();
        let expected = s.assessment();
        assert_eq!(expected.label, "Good");

        s.set_strategy(Strategy::CompositionWeighted);
        assert_eq!(s.assessment(), expected);
    }

    #[test]
    fn test_strategy_switch_keeps_live_preview() {
        let mut s = session();
        s.generate();
        s.set_length(4);
        let preview = s.assessment();
        assert_eq!(preview, strength::assess_selection(&s.selection(), 4));

        s.set_strategy(Strategy::CompositionWeighted);
        assert_eq!(s.assessment(), preview);
        s.set_strategy(Strategy::PerCharacterAnalysis);
        assert_eq!(s.assessment(), preview);
    }

    #[test]
    fn test_strategy_switch_rescores() {
        let mut s = session();
        s.generate();
        s.set_strategy(Strategy::CompositionWeighted);
        let password = s.password().unwrap().as_str().to_string();
        assert_eq!(
            s.assessment(),
            strength::assess_password(Strategy::CompositionWeighted, &password)
        );
    }
}
