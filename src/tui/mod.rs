//! Interactive TUI menu.

mod input;
mod options;
mod text;

use std::process::ExitCode;

pub use input::*;
pub use options::*;
pub use text::*;

/// Run TUI interactive mode.
pub fn run() -> ExitCode {
    passforge::logging::init(false);
    gen_main_menu()
}
