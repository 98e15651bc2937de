//! Password generation: alphabets, random draws and memorable phrases.

pub mod charset;
mod generate;
pub mod memorable;

pub use generate::{Password, generate, generate_batch, generate_digits};
pub use memorable::generate_memorable;
