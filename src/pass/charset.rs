//! Character set building for password generation.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{GenerateError, Shortfall};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

/// Default symbol pool.
pub const EXTENDED_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/~`";

/// Full ASCII punctuation, in code point order.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Characters dropped from letter and digit pools by `exclude_similar`.
pub const SIMILAR: [char; 5] = ['I', 'l', '1', 'O', '0'];

/// A character category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    /// Concatenation order used by [`Alphabet::build`].
    pub const ORDER: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Upper => "Uppercase (A-Z)",
            CharClass::Lower => "Lowercase (a-z)",
            CharClass::Digit => "Digits (0-9)",
            CharClass::Symbol => "Symbols",
        }
    }
}

/// Which pool supplies the symbol class.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SymbolSet {
    #[default]
    Extended,
    Punctuation,
    Custom(String),
}

impl SymbolSet {
    pub fn chars(&self) -> &str {
        match self {
            SymbolSet::Extended => EXTENDED_SYMBOLS,
            SymbolSet::Punctuation => PUNCTUATION,
            SymbolSet::Custom(s) => s,
        }
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolSet::Extended => write!(f, "extended"),
            SymbolSet::Punctuation => write!(f, "punctuation"),
            SymbolSet::Custom(s) => write!(f, "custom:{s}"),
        }
    }
}

impl FromStr for SymbolSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "extended" => Ok(SymbolSet::Extended),
            "punctuation" => Ok(SymbolSet::Punctuation),
            _ => s
                .strip_prefix("custom:")
                .map(|chars| SymbolSet::Custom(chars.to_string()))
                .ok_or_else(|| format!("unknown symbol set: {s}")),
        }
    }
}

/// Enabled character classes plus the exclude-similar modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSelection {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_similar: bool,
}

impl ClassSelection {
    pub const fn new(
        lowercase: bool,
        uppercase: bool,
        digits: bool,
        symbols: bool,
        exclude_similar: bool,
    ) -> Self {
        Self {
            lowercase,
            uppercase,
            digits,
            symbols,
            exclude_similar,
        }
    }

    pub const fn digits_only() -> Self {
        Self::new(false, false, true, false, false)
    }

    pub fn has(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.uppercase,
            CharClass::Lower => self.lowercase,
            CharClass::Digit => self.digits,
            CharClass::Symbol => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        match class {
            CharClass::Upper => self.uppercase = enabled,
            CharClass::Lower => self.lowercase = enabled,
            CharClass::Digit => self.digits = enabled,
            CharClass::Symbol => self.symbols = enabled,
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set(class, !self.has(class));
    }

    /// Number of enabled classes (0..=4).
    pub fn class_count(&self) -> usize {
        CharClass::ORDER.iter().filter(|c| self.has(**c)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.class_count() == 0
    }
}

impl Default for ClassSelection {
    fn default() -> Self {
        Self::new(true, true, true, true, false)
    }
}

/// The working set of characters a password is drawn from.
///
/// Duplicates are kept: a custom symbol set overlapping another pool simply
/// weights those characters more.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    /// Build with the default symbol set.
    pub fn build(selection: &ClassSelection) -> Self {
        Self::build_with(selection, &SymbolSet::default())
    }

    /// Concatenate the enabled pools in [`CharClass::ORDER`].
    ///
    /// Empty when nothing is enabled; use [`Alphabet::build_checked`] to get
    /// that as an error instead.
    pub fn build_with(selection: &ClassSelection, symbols: &SymbolSet) -> Self {
        let mut chars: Vec<char> = Vec::new();

        for class in CharClass::ORDER {
            if !selection.has(class) {
                continue;
            }
            match class {
                CharClass::Upper => extend_filtered(&mut chars, UPPERCASE, selection),
                CharClass::Lower => extend_filtered(&mut chars, LOWERCASE, selection),
                CharClass::Digit => extend_filtered(&mut chars, DIGITS, selection),
                // symbols are never filtered
                CharClass::Symbol => chars.extend(symbols.chars().chars()),
            }
        }

        debug!(
            size = chars.len(),
            classes = selection.class_count(),
            exclude_similar = selection.exclude_similar,
            "alphabet built"
        );
        Alphabet(chars)
    }

    /// Like [`Alphabet::build_with`], but reports an empty result.
    pub fn build_checked(
        selection: &ClassSelection,
        symbols: &SymbolSet,
    ) -> Result<Self, GenerateError> {
        if selection.is_empty() {
            return Err(GenerateError::EmptyAlphabet(Shortfall::NoClassSelected));
        }
        let alphabet = Self::build_with(selection, symbols);
        if alphabet.is_empty() {
            return Err(GenerateError::EmptyAlphabet(Shortfall::FilteredOut));
        }
        Ok(alphabet)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    /// Entropy in bits of a uniformly drawn password of `length`.
    pub fn entropy_bits(&self, length: usize) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        length as f64 * (self.0.len() as f64).log2()
    }
}

impl From<&str> for Alphabet {
    fn from(s: &str) -> Self {
        Alphabet(s.chars().collect())
    }
}

fn extend_filtered(chars: &mut Vec<char>, pool: &str, selection: &ClassSelection) {
    if selection.exclude_similar {
        chars.extend(pool.chars().filter(|c| !SIMILAR.contains(c)));
    } else {
        chars.extend(pool.chars());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(alphabet: &Alphabet) -> String {
        alphabet.as_slice().iter().collect()
    }

    #[test]
    fn test_all_classes_in_fixed_order() {
        let alphabet = Alphabet::build(&ClassSelection::default());
        let expected = format!("{UPPERCASE}{LOWERCASE}{DIGITS}{EXTENDED_SYMBOLS}");
        assert_eq!(collect(&alphabet), expected);
    }

    #[test]
    fn test_every_subset_is_exact_concatenation() {
        for mask in 1u8..16 {
            let selection = ClassSelection::new(
                mask & 0b0010 != 0,
                mask & 0b0001 != 0,
                mask & 0b0100 != 0,
                mask & 0b1000 != 0,
                false,
            );
            let mut expected = String::new();
            if selection.uppercase {
                expected.push_str(UPPERCASE);
            }
            if selection.lowercase {
                expected.push_str(LOWERCASE);
            }
            if selection.digits {
                expected.push_str(DIGITS);
            }
            if selection.symbols {
                expected.push_str(EXTENDED_SYMBOLS);
            }
            assert_eq!(collect(&Alphabet::build(&selection)), expected, "mask {mask:04b}");
        }
    }

    #[test]
    fn test_exclude_similar_spares_symbols() {
        let selection = ClassSelection::new(true, true, true, true, true);
        let symbols = SymbolSet::Custom("I|l1O0".to_string());
        let alphabet = Alphabet::build_with(&selection, &symbols);
        let text = collect(&alphabet);

        let (letters_and_digits, symbol_part) = text.split_at(text.len() - 6);
        for c in SIMILAR {
            assert!(!letters_and_digits.contains(c), "{c} should be filtered");
        }
        assert_eq!(symbol_part, "I|l1O0");
        assert_eq!(alphabet.len(), 24 + 25 + 8 + 6);
    }

    #[test]
    fn test_empty_selection_yields_empty_alphabet() {
        let selection = ClassSelection::new(false, false, false, false, true);
        assert!(Alphabet::build(&selection).is_empty());
        assert_eq!(
            Alphabet::build_checked(&selection, &SymbolSet::Extended),
            Err(GenerateError::EmptyAlphabet(Shortfall::NoClassSelected))
        );
    }

    #[test]
    fn test_empty_custom_symbols_is_filtered_out() {
        let selection = ClassSelection::new(false, false, false, true, false);
        let result = Alphabet::build_checked(&selection, &SymbolSet::Custom(String::new()));
        assert_eq!(
            result,
            Err(GenerateError::EmptyAlphabet(Shortfall::FilteredOut))
        );
    }

    #[test]
    fn test_punctuation_set() {
        let selection = ClassSelection::new(false, false, false, true, false);
        let alphabet = Alphabet::build_with(&selection, &SymbolSet::Punctuation);
        assert_eq!(alphabet.len(), 32);
        assert!(alphabet.as_slice().iter().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn test_symbol_set_parse() {
        assert_eq!("extended".parse(), Ok(SymbolSet::Extended));
        assert_eq!("punctuation".parse(), Ok(SymbolSet::Punctuation));
        assert_eq!(
            "custom:!?".parse(),
            Ok(SymbolSet::Custom("!?".to_string()))
        );
        assert!("bogus".parse::<SymbolSet>().is_err());
    }

    #[test]
    fn test_entropy_bits() {
        let alphabet = Alphabet::from("01");
        assert_eq!(alphabet.entropy_bits(8), 8.0);
        assert_eq!(Alphabet::default().entropy_bits(8), 0.0);
    }
}
