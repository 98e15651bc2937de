//! User preferences.

mod file;

use std::path::{Path, PathBuf};

use crate::error::SettingsError;
use crate::pass::charset::{ClassSelection, SymbolSet};
use crate::strength::Strategy;
use crate::templates::PLACEHOLDER;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_similar: bool,
    pub symbol_set: SymbolSet,
    pub auto_copy: bool,
    pub strategy: Strategy,
    pub template: usize,
}

impl Settings {
    /// Load from the default location. A missing file gives defaults.
    pub fn load_from_file() -> Result<Self, SettingsError> {
        Self::load_from(&file::default_path())
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        self.save_to(&file::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(path, self)
    }

    pub fn path() -> PathBuf {
        file::default_path()
    }

    pub fn selection(&self) -> ClassSelection {
        ClassSelection::new(
            self.lowercase,
            self.uppercase,
            self.digits,
            self.symbols,
            self.exclude_similar,
        )
    }

    pub fn set_selection(&mut self, selection: ClassSelection) {
        self.lowercase = selection.lowercase;
        self.uppercase = selection.uppercase;
        self.digits = selection.digits;
        self.symbols = selection.symbols;
        self.exclude_similar = selection.exclude_similar;
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 20,
            number_of_passwords: 1,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            exclude_similar: false,
            symbol_set: SymbolSet::Extended,
            auto_copy: false,
            strategy: Strategy::PerCharacterAnalysis,
            template: PLACEHOLDER,
        }
    }
}
