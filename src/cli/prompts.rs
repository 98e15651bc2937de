//! Centralized warning and prompt messages for CLI output.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use passforge::strength::Assessment;

use crate::terminal::{RED, RESET, YELLOW, strength_gauge};

/// Suppresses warnings, notices and prompts.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// True when quiet, or when stdin is not a tty.
fn skip_prompt() -> bool {
    quiet() || unsafe { libc::isatty(0) != 1 }
}

/// Yellow, on stderr. Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red, on stderr. Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Strength line on stderr so stdout stays pipeable.
pub fn strength(assessment: &Assessment) {
    if !quiet() {
        eprintln!("Strength: {}", strength_gauge(assessment, 20));
    }
}

pub fn clipboard_copied(count: usize) {
    if !quiet() {
        println!("*** -{count} COPIED TO CLIPBOARD- ***");
    }
}

/// Clipboard is unavailable. True to print to the terminal instead.
/// Non-interactive or quiet runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}
