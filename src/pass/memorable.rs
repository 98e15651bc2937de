//! Memorable `Adjective-Noun-1234` phrases.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use tracing::info;

use super::Password;

pub const ADJECTIVES: [&str; 12] = [
    "Brave", "Calm", "Clever", "Swift", "Silent", "Golden", "Bright", "Lucky", "Mighty", "Quiet",
    "Wild", "Happy",
];

pub const NOUNS: [&str; 12] = [
    "Tiger", "River", "Falcon", "Mountain", "Comet", "Forest", "Harbor", "Lantern", "Meadow",
    "Rocket", "Thunder", "Willow",
];

pub const SEPARATORS: [char; 3] = ['-', '_', '.'];

/// Exclusive upper bound of the trailing number.
pub const NUMBER_LIMIT: u32 = 9999;

/// Pick an adjective, a noun, a number below [`NUMBER_LIMIT`] and one
/// separator, and join them. Ignores the class selection entirely.
pub fn generate_memorable() -> Password {
    generate_memorable_with(&mut OsRng)
}

pub(crate) fn generate_memorable_with<R: Rng + CryptoRng>(rng: &mut R) -> Password {
    // Arrays are non-empty, so choose always yields.
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or(ADJECTIVES[0]);
    let noun = NOUNS.choose(rng).copied().unwrap_or(NOUNS[0]);
    let number = rng.gen_range(0..NUMBER_LIMIT);
    let sep = SEPARATORS.choose(rng).copied().unwrap_or(SEPARATORS[0]);

    let phrase = format!("{adjective}{sep}{noun}{sep}{number}");
    info!(length = phrase.len(), "memorable password generated");
    Password::new(phrase)
}

/// The parts of a memorable phrase, if `text` is one.
pub fn split(text: &str) -> Option<(&str, char, &str, u32)> {
    let sep = text.chars().find(|c| SEPARATORS.contains(c))?;
    let mut parts = text.split(sep);
    let (adjective, noun, number) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || !ADJECTIVES.contains(&adjective) || !NOUNS.contains(&noun) {
        return None;
    }
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let number: u32 = number.parse().ok()?;
    (number < NUMBER_LIMIT).then_some((adjective, sep, noun, number))
}
