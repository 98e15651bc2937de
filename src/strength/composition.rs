//! Composition-weighted score: length tier, class weight, combination bonuses.

use super::{Assessment, Composition, Level, classify};

/// `(minimum length, base points)`, longest first.
const LENGTH_TIERS: [(usize, u32); 5] = [(30, 40), (20, 35), (16, 28), (12, 20), (0, 10)];

const CLASS_WEIGHT: u32 = 16;

/// Length >= 16 with at least three classes.
const MIXED_BONUS: u32 = 22;
/// Length >= 24 with all four classes.
const FULL_BONUS: u32 = 15;

const MAX_SCORE: u32 = 100;

pub const LEVELS: [Level; 5] = [
    Level::new(95, "Unbreakable", "#9d4edd"),
    Level::new(80, "Excellent", "#649dff"),
    Level::new(65, "Good", "#4deeea"),
    Level::new(50, "Medium", "#ffd166"),
    Level::new(0, "Weak", "#ef476f"),
];

/// Unclamped score.
pub fn raw_score(length: usize, class_count: usize) -> u32 {
    let base = LENGTH_TIERS
        .iter()
        .find(|(min, _)| length >= *min)
        .map_or(0, |(_, points)| *points);

    let classes = class_count.min(4) as u32;
    let mut score = base + classes * CLASS_WEIGHT;
    if length >= 16 && classes >= 3 {
        score += MIXED_BONUS;
    }
    if length >= 24 && classes == 4 {
        score += FULL_BONUS;
    }
    score
}

/// Score clamped to `0..=100`.
pub fn score(length: usize, class_count: usize) -> u8 {
    raw_score(length, class_count).min(MAX_SCORE) as u8
}

pub fn assess(length: usize, class_count: usize) -> Assessment {
    let score = score(length, class_count);
    let level = classify(i64::from(score), &LEVELS);
    Assessment::new(score, level.label, level.color)
}

/// Same formula, with length and classes read off a real password.
pub fn assess_password(password: &str) -> Assessment {
    let comp = Composition::of(password);
    assess(comp.length, comp.class_count())
}
