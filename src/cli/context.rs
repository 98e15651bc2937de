//! CLI context - bundles settings, flags and the generation session.

use passforge::pass::charset::{Alphabet, SymbolSet};
use passforge::pass::{self, Password};
use passforge::session::LENGTH_RANGE;
use passforge::strength::{self, Strategy};
use passforge::templates::{self, GenerationMode};
use passforge::{Clipboard, GenerateError, NoticeLevel, Session, Settings};
use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::clipboard::SystemClipboard;
use crate::tui::{print_help, print_templates};

/// Why the run stopped before (or instead of) generating.
#[derive(Debug)]
pub enum Exit {
    /// Nothing left to do; not an error.
    Done,
    /// Bad flags or values.
    Usage(String),
    /// Valid request that could not be carried out.
    Failed(String),
}

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        } else {
            Settings::default()
        };
        Self { settings, flags }
    }

    pub fn run(&mut self) -> Result<(), Exit> {
        self.handle_info_flags()?;
        self.apply_flags()?;
        self.handle_save();
        self.handle_score()?;
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if !self.flags.is_info_only() {
            return Ok(());
        }
        if self.flags.help {
            print_help();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        if self.flags.list_templates {
            print_templates();
        }
        Err(Exit::Done)
    }

    /// Fold the flags into settings.
    fn apply_flags(&mut self) -> Result<(), Exit> {
        let flags = &self.flags;
        let settings = &mut self.settings;

        if let Some(len) = flags.length {
            if !LENGTH_RANGE.contains(&len) {
                let err = GenerateError::InvalidLength {
                    length: len,
                    min: *LENGTH_RANGE.start(),
                    max: *LENGTH_RANGE.end(),
                };
                return Err(Exit::Usage(err.to_string()));
            }
            settings.pass_length = len;
        }
        if let Some(num) = flags.number {
            settings.number_of_passwords = num;
        }

        if flags.no_lower {
            settings.lowercase = false;
        }
        if flags.no_upper {
            settings.uppercase = false;
        }
        if flags.no_digits {
            settings.digits = false;
        }
        if flags.no_symbols {
            settings.symbols = false;
        }
        if flags.exclude_similar {
            settings.exclude_similar = true;
        }
        if flags.punctuation {
            settings.symbol_set = SymbolSet::Punctuation;
        }
        if let Some(ref chars) = flags.special {
            settings.symbol_set = SymbolSet::Custom(chars.clone());
        }

        if let Some(ref name) = flags.strategy {
            settings.strategy = name.parse::<Strategy>().map_err(Exit::Usage)?;
        }

        let template = match (&flags.template, flags.memorable) {
            (Some(_), true) => {
                return Err(Exit::Usage(
                    "--template and --memorable are mutually exclusive".to_string(),
                ));
            }
            (Some(name), false) => Some(name.as_str()),
            (None, true) => Some("memorable"),
            (None, false) => None,
        };
        if let Some(name) = template {
            settings.template = templates::find(name).map_err(|e| Exit::Usage(e.to_string()))?;
            if flags.changes_options() && settings.template != templates::PLACEHOLDER {
                prompts::warn("Template overrides length and character type flags");
            }
        }

        Ok(())
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::warn(&format!(
                "Settings saved to {}",
                Settings::path().display()
            )),
            Err(e) => prompts::error(&format!("Failed to save settings: {e}")),
        }
    }

    fn handle_score(&self) -> Result<(), Exit> {
        let Some(ref password) = self.flags.score else {
            return Ok(());
        };
        let assessment = strength::assess_password(self.settings.strategy, password);
        println!(
            "{} {}/100 ({})",
            assessment.label, assessment.score, self.settings.strategy
        );
        Err(Exit::Done)
    }

    /// Generate passwords and print or copy them.
    pub fn generate_output(&mut self) -> Result<(), Exit> {
        let mut clipboard = SystemClipboard::disabled();
        if self.flags.clipboard {
            clipboard = SystemClipboard::connect();
            if !clipboard.is_available() && !prompts::clipboard_fallback_prompt() {
                return Err(Exit::Done);
            }
        }
        let to_clipboard = clipboard.is_available();

        let mut session = Session::new(&self.settings, clipboard);
        // Copying is handled below, once for the whole batch.
        session.set_auto_copy(false);

        if self.flags.preview {
            println!("{}", preview_line(&session));
            return Ok(());
        }

        let count = self.settings.number_of_passwords.max(1);
        let passwords = draw_all(&mut session, count)?;
        let mut joined = String::new();

        for password in &passwords {
            if to_clipboard {
                joined.push_str(password.as_str());
                joined.push('\n');
            } else {
                println!("{password}");
            }
        }

        if let [password] = passwords.as_slice() {
            prompts::strength(&strength::assess_password(
                session.strategy(),
                password.as_str(),
            ));
        }

        if to_clipboard {
            let result = session.clipboard_mut().set_text(joined.trim_end());
            joined.zeroize();
            match result {
                Ok(()) => prompts::clipboard_copied(count),
                Err(e) => return Err(Exit::Failed(e.to_string())),
            }
        }
        Ok(())
    }
}

/// Live composition estimate for the effective options, without drawing.
fn preview_line<C: Clipboard>(session: &Session<C>) -> String {
    let estimate = strength::assess_selection(&session.selection(), session.length());
    let head = format!("{} {}/100", estimate.label, estimate.score);
    if session.mode() == GenerationMode::Memorable {
        return format!("{head} • memorable phrase");
    }
    let alphabet = session.alphabet();
    format!(
        "{head} • {} chars from {} • {:.1} bits",
        session.length(),
        alphabet.len(),
        alphabet.entropy_bits(session.length())
    )
}

/// `count` passwords for the session's options. Standard mode draws them as
/// one batch from a single alphabet.
fn draw_all<C: Clipboard>(session: &mut Session<C>, count: usize) -> Result<Vec<Password>, Exit> {
    if session.mode() == GenerationMode::Standard {
        let alphabet = Alphabet::build_checked(&session.selection(), session.symbols())
            .map_err(|e| Exit::Failed(e.to_string()))?;
        return pass::generate_batch(&alphabet, session.length(), count)
            .map_err(|e| Exit::Failed(e.to_string()));
    }

    (0..count)
        .map(|_| {
            let notice = session.generate();
            if notice.level != NoticeLevel::Info {
                return Err(Exit::Failed(notice.text));
            }
            session
                .password()
                .cloned()
                .ok_or_else(|| Exit::Failed("no password generated".to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use passforge::ClipboardError;

    use super::*;
    use crate::cli::parse;

    struct Memory;

    impl Clipboard for Memory {
        fn set_text(&mut self, _: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    fn context(list: &[&str]) -> Context {
        let args: Vec<String> = std::iter::once("passforge")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        Context {
            settings: Settings::default(),
            flags: parse(&args).unwrap(),
        }
    }

    fn usage(list: &[&str]) -> String {
        match context(list).apply_flags() {
            Err(Exit::Usage(msg)) => msg,
            other => panic!("expected usage error, got {other:?}"),
        }
    }

    #[test]
    fn test_template_and_memorable_conflict() {
        assert!(usage(&["-t", "pin", "-m"]).contains("mutually exclusive"));
    }

    #[test]
    fn test_length_out_of_range() {
        assert!(usage(&["-l", "3"]).contains("outside 4..=128"));
        assert!(usage(&["-l", "129"]).contains("129"));
        assert!(context(&["-l", "128"]).apply_flags().is_ok());
    }

    #[test]
    fn test_bad_strategy_and_template() {
        assert!(usage(&["--strategy", "entropy"]).contains("unknown strategy"));
        assert!(usage(&["-t", "vault"]).contains("vault"));
    }

    #[test]
    fn test_flags_fold_into_settings() {
        let mut ctx = context(&[
            "-l", "32", "-n", "3", "--no-upper", "-x", "--special", "#%", "--strategy", "a",
        ]);
        ctx.apply_flags().unwrap();
        let settings = &ctx.settings;
        assert_eq!(settings.pass_length, 32);
        assert_eq!(settings.number_of_passwords, 3);
        assert!(!settings.uppercase && settings.lowercase);
        assert!(settings.exclude_similar);
        assert_eq!(settings.symbol_set, SymbolSet::Custom("#%".to_string()));
        assert_eq!(settings.strategy, Strategy::CompositionWeighted);
    }

    #[test]
    fn test_template_overrides_length_and_classes() {
        let mut ctx = context(&["-t", "pin", "-l", "30", "--no-digits"]);
        ctx.apply_flags().unwrap();
        assert_eq!(ctx.settings.template, 1);

        let session = Session::new(&ctx.settings, Memory);
        assert_eq!(session.length(), 4);
        assert_eq!(session.mode(), GenerationMode::Pin { length: 4 });
        assert!(session.selection().digits);
    }

    #[test]
    fn test_memorable_flag_selects_template() {
        let mut ctx = context(&["-m"]);
        ctx.apply_flags().unwrap();
        assert_eq!(ctx.settings.template, templates::find("memorable").unwrap());
    }

    #[test]
    fn test_preview_is_composition_estimate() {
        let mut ctx = context(&["-t", "wifi", "--preview"]);
        ctx.apply_flags().unwrap();
        let session = Session::new(&ctx.settings, Memory);
        let estimate = strength::assess_selection(&session.selection(), session.length());

        let line = preview_line(&session);
        assert!(line.starts_with(&format!("{} {}/100", estimate.label, estimate.score)));
        assert!(line.contains("bits"));
    }

    #[test]
    fn test_preview_memorable_has_no_entropy() {
        let mut ctx = context(&["-m", "--preview"]);
        ctx.apply_flags().unwrap();
        let line = preview_line(&Session::new(&ctx.settings, Memory));
        assert!(line.ends_with("memorable phrase"));
        assert!(!line.contains("bits"));
    }

    #[test]
    fn test_draw_all_batches() {
        let mut session = Session::new(&Settings::default(), Memory);
        let passwords = draw_all(&mut session, 5).unwrap();
        assert_eq!(passwords.len(), 5);
        assert!(passwords.iter().all(|p| p.len() == 20));

        let mut ctx = context(&["-t", "pin"]);
        ctx.apply_flags().unwrap();
        let mut session = Session::new(&ctx.settings, Memory);
        let pins = draw_all(&mut session, 3).unwrap();
        assert!(
            pins.iter()
                .all(|p| p.len() == 4 && p.as_str().chars().all(|c| c.is_ascii_digit()))
        );
    }

    #[test]
    fn test_draw_all_empty_alphabet_fails() {
        let mut ctx = context(&["--no-lower", "--no-upper", "--no-digits", "--no-symbols"]);
        ctx.apply_flags().unwrap();
        let mut session = Session::new(&ctx.settings, Memory);
        match draw_all(&mut session, 2) {
            Err(Exit::Failed(msg)) => assert!(msg.contains("at least one")),
            other => panic!("expected failure, got {:?}", other.map(|v| v.len())),
        }
    }
}
