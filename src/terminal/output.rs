//! Terminal output utilities.
//!
//! Box drawing, the strength gauge, ANSI helpers.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use crossterm::terminal::disable_raw_mode;

use passforge::strength::Assessment;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[33m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_warning(msg: &str) {
    println!("{YELLOW}{msg}{RESET}");
}

// ============================================================================
// Color tokens
// ============================================================================

/// Parse a `#rrggbb` color token.
pub fn token_color(token: &str) -> Option<Color> {
    let hex = token.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Paint `text` with a color token; unknown tokens leave it plain.
pub fn paint(text: &str, token: &str) -> String {
    match token_color(token) {
        Some(color) => text.with(color).bold().to_string(),
        None => text.to_string(),
    }
}

/// `██████░░░░ 84/100 Excellent` in the assessment's color.
pub fn strength_gauge(assessment: &Assessment, width: usize) -> String {
    let filled = (usize::from(assessment.score) * width).div_ceil(100).min(width);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    format!(
        "{} {:>3}/100 {}",
        paint(&bar, assessment.color),
        assessment.score,
        paint(assessment.label, assessment.color)
    )
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let left_pad = (inner_width - display_len) / 2;
        let right_pad = inner_width - display_len - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

pub fn box_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let flag_padded = format!("{:<width$.width$}", flag, width = flag_col);

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();
    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let first = lines.first().map(String::as_str).unwrap_or("");
    println!("│ {}{:<width$} │", flag_padded, first, width = desc_col);

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        println!("│ {}{:<width$} │", indent, line, width = desc_col);
    }
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_color() {
        assert_eq!(
            token_color("#9d4edd"),
            Some(Color::Rgb {
                r: 0x9d,
                g: 0x4e,
                b: 0xdd
            })
        );
        assert_eq!(token_color("9d4edd"), None);
        assert_eq!(token_color("#zzzzzz"), None);
        // six bytes, but not six characters
        assert_eq!(token_color("#ab€c"), None);
    }

    #[test]
    fn test_console_width_skips_escapes() {
        assert_eq!(console_width("\x1b[31mabc\x1b[0m"), 3);
        assert_eq!(console_width(&paint("abc", "#ff0000")), 3);
    }

    #[test]
    fn test_gauge_fill() {
        let gauge = strength_gauge(&Assessment::new(50, "Medium", "#ffd166"), 10);
        assert_eq!(gauge.matches('█').count(), 5);
        assert_eq!(gauge.matches('░').count(), 5);
        assert!(gauge.contains(" 50/100"));
    }
}
