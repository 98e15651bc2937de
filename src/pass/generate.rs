//! Password generation.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use tracing::{info, warn};
use zeroize::Zeroize;

use super::charset::{Alphabet, ClassSelection};
use crate::error::{GenerateError, Shortfall};

/// A generated password. Wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub(crate) fn new(inner: String) -> Self {
        Password(inner)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Draw `length` characters uniformly from `alphabet` using the OS CSPRNG.
pub fn generate(alphabet: &Alphabet, length: usize) -> Result<Password, GenerateError> {
    generate_with(&mut OsRng, alphabet, length)
}

/// Generate `count` independent passwords.
pub fn generate_batch(
    alphabet: &Alphabet,
    length: usize,
    count: usize,
) -> Result<Vec<Password>, GenerateError> {
    (0..count).map(|_| generate(alphabet, length)).collect()
}

/// Digits-only password of exactly `length` characters.
pub fn generate_digits(length: usize) -> Result<Password, GenerateError> {
    generate(&Alphabet::build(&ClassSelection::digits_only()), length)
}

pub(crate) fn generate_with<R: Rng + CryptoRng>(
    rng: &mut R,
    alphabet: &Alphabet,
    length: usize,
) -> Result<Password, GenerateError> {
    if alphabet.is_empty() {
        warn!("generation refused: empty alphabet");
        return Err(GenerateError::EmptyAlphabet(Shortfall::NoClassSelected));
    }
    if length == 0 {
        return Err(GenerateError::InvalidLength {
            length,
            min: 1,
            max: usize::MAX,
        });
    }

    let chars = alphabet.as_slice();
    let mut buf = String::with_capacity(length);
    for _ in 0..length {
        // gen_range is unbiased, no modulo reduction
        buf.push(chars[rng.gen_range(0..chars.len())]);
    }

    info!(length, alphabet = chars.len(), "password generated");
    Ok(Password::new(buf))
}
