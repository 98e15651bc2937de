use std::process::ExitCode;
use std::time::Duration;

use passforge::pass::charset::{CharClass, SymbolSet};
use passforge::session::{LENGTH_RANGE, NOTICE_TIMEOUT};
use passforge::strength::Strategy;
use passforge::{Clipboard, Notice, Session, Settings};

use super::{
    enter_prompt, get_editable_input, get_numeric_input, print_help, print_main_menu,
    print_templates,
};
use crate::clipboard::SystemClipboard;
use crate::terminal::{clear, flush, key_pending, reset_terminal};

enum LoopAction {
    Continue,
    Quit,
}

pub fn gen_main_menu() -> ExitCode {
    reset_terminal();

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        tracing::warn!("{e}, using defaults");
        Settings::default()
    });
    let mut session = Session::new(&settings, SystemClipboard::connect());
    let mut notice: Option<Notice> = None;

    loop {
        print_main_menu(&session, notice.as_ref());
        if notice.is_some() {
            print!("{}: ", enter_prompt());
            flush();
            if expire_notice(&mut notice, key_pending) {
                continue;
            }
        }

        let Some(input) = get_editable_input(enter_prompt(), "") else {
            continue;
        };

        let (action, next) = menu_option(input.trim(), &mut session, &settings);
        notice = next;
        if let LoopAction::Quit = action {
            clear();
            return ExitCode::SUCCESS;
        }
    }
}

/// Give a shown notice [`NOTICE_TIMEOUT`] to be read. `wait` reports whether
/// input arrived first; if not, the notice is dropped and true is returned so
/// the menu gets redrawn without it.
fn expire_notice(notice: &mut Option<Notice>, wait: impl FnOnce(Duration) -> bool) -> bool {
    if notice.is_none() || wait(NOTICE_TIMEOUT) {
        return false;
    }
    *notice = None;
    true
}

fn menu_option<C: Clipboard>(
    choice: &str,
    session: &mut Session<C>,
    saved: &Settings,
) -> (LoopAction, Option<Notice>) {
    use LoopAction::*;

    let notice = match choice {
        "" => Some(session.generate()),
        "1" => {
            let prompt = format!(
                "Password length ({}-{})",
                LENGTH_RANGE.start(),
                LENGTH_RANGE.end()
            );
            get_numeric_input(&prompt, session.length()).map(|len| {
                let kept = session.set_length(len);
                if kept == len {
                    Notice::info(format!("Length set to {kept}"))
                } else {
                    Notice::warning(format!("Length clamped to {kept}"))
                }
            })
        }
        "2" => pick_template(session),
        "3" | "4" | "5" | "6" => {
            let index = choice.parse::<usize>().unwrap_or(3) - 3;
            session.toggle(CharClass::ORDER[index]);
            None
        }
        "7" => {
            let exclude = !session.selection().exclude_similar;
            session.set_exclude_similar(exclude);
            None
        }
        "8" => pick_symbols(session),
        "9" => {
            let next = match session.strategy() {
                Strategy::CompositionWeighted => Strategy::PerCharacterAnalysis,
                Strategy::PerCharacterAnalysis => Strategy::CompositionWeighted,
            };
            session.set_strategy(next);
            None
        }
        "10" => {
            session.set_auto_copy(!session.auto_copy());
            None
        }
        "c" => Some(session.copy()),
        "s" => Some(save(session, saved)),
        "r" => {
            let defaults = Settings::default();
            session.set_selection(defaults.selection());
            session.set_length(defaults.pass_length);
            session.set_symbols(defaults.symbol_set);
            session.set_strategy(defaults.strategy);
            session.set_auto_copy(defaults.auto_copy);
            Some(Notice::info("Defaults restored"))
        }
        "h" | "help" => {
            clear();
            print_help();
            let _ = get_editable_input("Press Enter to return", "");
            None
        }
        "q" | "e" => return (Quit, None),
        _ => Some(Notice::warning("Invalid option")),
    };

    (Continue, notice)
}

fn pick_template<C: Clipboard>(session: &mut Session<C>) -> Option<Notice> {
    clear();
    print_templates();
    let answer = get_editable_input("Template number or name", "")?;
    let notice = passforge::templates::find(&answer)
        .and_then(|index| session.select_template(index))
        .unwrap_or_else(|e| Notice::warning(e.to_string()));
    Some(notice)
}

fn pick_symbols<C: Clipboard>(session: &mut Session<C>) -> Option<Notice> {
    let answer = get_editable_input("e) extended | p) punctuation | or type your own", "")?;
    let set = match answer.trim() {
        "" => return None,
        "e" => SymbolSet::Extended,
        "p" => SymbolSet::Punctuation,
        custom => SymbolSet::Custom(custom.to_string()),
    };
    session.set_symbols(set);
    None
}

fn save<C: Clipboard>(session: &Session<C>, saved: &Settings) -> Notice {
    let mut settings = saved.clone();
    settings.pass_length = session.length();
    settings.set_selection(session.selection());
    settings.symbol_set = session.symbols().clone();
    settings.strategy = session.strategy();
    settings.auto_copy = session.auto_copy();
    settings.template = session.template();

    match settings.save_to_file() {
        Ok(()) => Notice::info(format!("Settings saved to {}", Settings::path().display())),
        Err(e) => Notice::error(format!("Error saving settings: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_notice_expires_without_input() {
        let waited = Cell::new(None);
        let mut notice = Some(Notice::info("Password copied"));
        let expired = expire_notice(&mut notice, |timeout| {
            waited.set(Some(timeout));
            false
        });
        assert!(expired);
        assert!(notice.is_none());
        assert_eq!(waited.get(), Some(NOTICE_TIMEOUT));
    }

    #[test]
    fn test_notice_kept_when_typing() {
        let mut notice = Some(Notice::warning("Invalid option"));
        assert!(!expire_notice(&mut notice, |_| true));
        assert!(notice.is_some());
    }

    #[test]
    fn test_no_notice_no_wait() {
        let mut notice = None;
        assert!(!expire_notice(&mut notice, |_| panic!("should not wait")));
    }
}
