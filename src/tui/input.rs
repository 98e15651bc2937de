use crate::terminal::{Key, RawModeGuard, flush, read_key, reset_terminal};

/// Free text input. `None` when cancelled with Esc/Ctrl+Q.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit_line(prompt, initial_value, |_| true)
}

/// Digits-only input. `None` when cancelled or left empty.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };
    edit_line(prompt, &initial, |c| c.is_ascii_digit())?
        .parse()
        .ok()
}

/// Single-line editor in raw mode. `accept` filters typed characters.
fn edit_line(prompt: &str, initial_value: &str, accept: fn(char) -> bool) -> Option<String> {
    let mut input: Vec<char> = initial_value.chars().collect();
    let mut cursor = input.len();
    let mut drawn_len = input.len();

    // Without raw mode we can't edit; keep the initial value.
    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial_value.to_string()),
    };

    print!("\r{}: {}", prompt, initial_value);
    flush();

    let cancelled = loop {
        let key = match read_key() {
            Ok(Some(key)) => key,
            Ok(None) => continue,
            Err(_) => break false,
        };

        match key {
            Key::Interrupt => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            Key::Cancel => break true,
            Key::Enter => break false,
            Key::ClearLine => {
                input.clear();
                cursor = 0;
            }
            Key::Backspace if cursor > 0 => {
                cursor -= 1;
                input.remove(cursor);
            }
            Key::Delete if cursor < input.len() => {
                input.remove(cursor);
            }
            Key::Left if cursor > 0 => cursor -= 1,
            Key::Right if cursor < input.len() => cursor += 1,
            Key::Home => cursor = 0,
            Key::End => cursor = input.len(),
            Key::Char(c) if accept(c) => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        let text: String = input.iter().collect();
        print!("\r{}: {}", prompt, " ".repeat(drawn_len + 1));
        print!("\r{}: {}", prompt, text);
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
        flush();
        drawn_len = input.len();
    };

    // Leave raw mode before the newline.
    drop(guard);
    println!();

    if cancelled {
        None
    } else {
        Some(input.into_iter().collect())
    }
}
