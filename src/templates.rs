//! Fixed catalog of presets.
//!
//! Index 0 is a "choose a template" placeholder. Applying a template reports
//! its precomputed assessment rather than scoring anything.

use tracing::debug;

use crate::error::{GenerateError, TemplateError};
use crate::pass::charset::ClassSelection;
use crate::pass::{self, Password};
use crate::strength::{Assessment, analysis};

pub const PLACEHOLDER: usize = 0;

/// How a template wants passwords produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationMode {
    /// Uniform draw from the selected alphabet.
    #[default]
    Standard,
    /// Digits only, exactly `length` characters.
    Pin { length: usize },
    /// Word-word-number phrase; the alphabet is ignored.
    Memorable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    /// Short name accepted on the command line.
    pub slug: &'static str,
    pub length: usize,
    pub selection: ClassSelection,
    pub expected: Assessment,
    pub mode: GenerationMode,
}

impl Template {
    pub fn is_placeholder(&self) -> bool {
        self.slug == CATALOG[PLACEHOLDER].slug
    }
}

const fn expected(tier: usize) -> Assessment {
    analysis::TIERS[tier].assessment()
}

pub static CATALOG: [Template; 6] = [
    Template {
        name: "Choose a template",
        slug: "none",
        length: 20,
        selection: ClassSelection::new(true, true, true, true, false),
        expected: Assessment::neutral("Not selected"),
        mode: GenerationMode::Standard,
    },
    Template {
        name: "PIN code",
        slug: "pin",
        length: 4,
        selection: ClassSelection::digits_only(),
        // Very Weak
        expected: expected(6),
        mode: GenerationMode::Pin { length: 4 },
    },
    Template {
        name: "Wi-Fi key",
        slug: "wifi",
        length: 20,
        selection: ClassSelection::new(true, true, true, false, true),
        // Good
        expected: expected(3),
        mode: GenerationMode::Standard,
    },
    Template {
        name: "Memorable phrase",
        slug: "memorable",
        length: 16,
        selection: ClassSelection::new(true, true, true, true, false),
        // High
        expected: expected(2),
        mode: GenerationMode::Memorable,
    },
    Template {
        name: "Online account",
        slug: "account",
        length: 16,
        selection: ClassSelection::new(true, true, true, true, false),
        // Very High
        expected: expected(1),
        mode: GenerationMode::Standard,
    },
    Template {
        name: "Maximum strength",
        slug: "max",
        length: 64,
        selection: ClassSelection::new(true, true, true, true, true),
        // Maximum
        expected: expected(0),
        mode: GenerationMode::Standard,
    },
];

pub fn catalog() -> &'static [Template] {
    &CATALOG
}

/// What selecting a template changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Application {
    pub index: usize,
    pub selection: ClassSelection,
    pub length: usize,
    pub assessment: Assessment,
    pub mode: GenerationMode,
    /// False for the placeholder: nothing to copy until the next generation.
    pub actionable: bool,
}

pub fn apply(index: usize) -> Result<Application, TemplateError> {
    let template = CATALOG.get(index).ok_or(TemplateError::UnknownIndex(index))?;
    debug!(index, name = template.name, "template applied");
    Ok(Application {
        index,
        selection: template.selection,
        length: template.length,
        assessment: template.expected,
        mode: template.mode,
        actionable: index != PLACEHOLDER,
    })
}

/// Find by index, slug or display name (case-insensitive).
pub fn find(key: &str) -> Result<usize, TemplateError> {
    let key = key.trim();
    if let Ok(index) = key.parse::<usize>() {
        return CATALOG
            .get(index)
            .map(|_| index)
            .ok_or(TemplateError::UnknownIndex(index));
    }
    CATALOG
        .iter()
        .position(|t| t.slug.eq_ignore_ascii_case(key) || t.name.eq_ignore_ascii_case(key))
        .ok_or_else(|| TemplateError::UnknownName(key.to_string()))
}

/// Make sure a PIN really is `length` digits; redraw digits-only if not.
pub fn enforce_pin(password: Password, length: usize) -> Result<Password, GenerateError> {
    let ok = password.len() == length && password.as_str().chars().all(|c| c.is_ascii_digit());
    if ok {
        return Ok(password);
    }
    debug!(
        got = password.len(),
        want = length,
        "pin does not match template, redrawing"
    );
    pass::generate_digits(length)
}
