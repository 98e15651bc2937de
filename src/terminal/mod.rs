//! Shared terminal utilities.
//!
//! Box drawing, the strength gauge, raw mode management and key decoding.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
