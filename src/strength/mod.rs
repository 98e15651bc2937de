//! Heuristic strength scoring.
//!
//! Two independent strategies exist and are deliberately kept apart:
//!
//! - [`Strategy::CompositionWeighted`]: length tier + weight per character
//!   class + combination bonuses. Works on an option set alone, so it drives
//!   the live preview, and can also score a finished password.
//! - [`Strategy::PerCharacterAnalysis`]: inspects the characters of a real
//!   password (types present, short-length and low-variety penalties) and
//!   buckets the result.
//!
//! Each strategy owns its threshold table. The score is a coarse UX signal,
//! not an entropy measurement.

pub mod analysis;
pub mod composition;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::pass::charset::ClassSelection;

/// Color token for "nothing to assess".
pub const NEUTRAL_COLOR: &str = "#8888bb";

/// Score, label and color token shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub score: u8,
    pub label: &'static str,
    pub color: &'static str,
}

impl Assessment {
    pub const fn new(score: u8, label: &'static str, color: &'static str) -> Self {
        Self {
            score,
            label,
            color,
        }
    }

    /// Zero score with the neutral color.
    pub const fn neutral(label: &'static str) -> Self {
        Self::new(0, label, NEUTRAL_COLOR)
    }
}

/// One row of a threshold table: scores `>= min` get this label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub min: i64,
    pub label: &'static str,
    pub color: &'static str,
}

impl Level {
    pub const fn new(min: i64, label: &'static str, color: &'static str) -> Self {
        Self { min, label, color }
    }
}

/// First level whose threshold `score` reaches. Tables are ordered
/// highest first and end with a catch-all row.
pub fn classify(score: i64, table: &'static [Level]) -> &'static Level {
    table
        .iter()
        .find(|level| score >= level.min)
        .unwrap_or(&table[table.len() - 1])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    CompositionWeighted,
    #[default]
    PerCharacterAnalysis,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::CompositionWeighted => write!(f, "composition"),
            Strategy::PerCharacterAnalysis => write!(f, "analysis"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "composition" | "a" => Ok(Strategy::CompositionWeighted),
            "analysis" | "b" => Ok(Strategy::PerCharacterAnalysis),
            other => Err(format!("unknown strategy: {other}")),
        }
    }
}

/// Live preview for an option set, without generating anything.
pub fn assess_selection(selection: &ClassSelection, length: usize) -> Assessment {
    composition::assess(length, selection.class_count())
}

/// Score a concrete password with the given strategy.
pub fn assess_password(strategy: Strategy, password: &str) -> Assessment {
    match strategy {
        Strategy::CompositionWeighted => composition::assess_password(password),
        Strategy::PerCharacterAnalysis => analysis::assess(password),
    }
}

/// Which character types a password contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Composition {
    pub length: usize,
    pub distinct: usize,
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl Composition {
    pub fn of(password: &str) -> Self {
        let mut comp = Composition::default();
        let mut seen = HashSet::new();
        for c in password.chars() {
            comp.length += 1;
            seen.insert(c);
            if c.is_uppercase() {
                comp.upper = true;
            } else if c.is_lowercase() {
                comp.lower = true;
            } else if c.is_ascii_digit() {
                comp.digit = true;
            } else if !c.is_alphanumeric() {
                comp.symbol = true;
            }
        }
        comp.distinct = seen.len();
        comp
    }

    pub fn class_count(&self) -> usize {
        [self.upper, self.lower, self.digit, self.symbol]
            .iter()
            .filter(|present| **present)
            .count()
    }
}
