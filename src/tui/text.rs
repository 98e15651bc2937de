use passforge::pass::charset::{CharClass, SIMILAR, SymbolSet};
use passforge::templates::{self, CATALOG};
use passforge::{Clipboard, Notice, NoticeLevel, Session};

use crate::terminal::{
    RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_rule, box_top, clear,
    flush, paint, print_error, print_warning, strength_gauge,
};

const GAUGE_WIDTH: usize = 30;

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

pub fn print_help() {
    box_top("Passforge");
    box_line_center("Password generator with strength gauge");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Toggle character types,");
    box_line("     pick a template and generate with Enter.");
    box_line("  2) Client: Pass flags directly (e.g., -l 16 -n 3) to generate");
    box_line("     passwords without the menu.");
    box_line("");
    box_line("USAGE:");
    box_line("  passforge [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password, 4 to 128 (default: 20)");
    box_opt("  -n, --number <N>", "How many passwords to generate");
    box_opt("      --no-lower", "Leave out lowercase letters");
    box_opt("      --no-upper", "Leave out uppercase letters");
    box_opt("      --no-digits", "Leave out digits");
    box_opt("      --no-symbols", "Leave out symbols");
    box_opt("  -x, --exclude-similar", "Drop I l 1 O 0 from letters and digits");
    box_opt("      --punctuation", "Use all ASCII punctuation as symbols");
    box_opt("      --special <CHARS>", "Override the symbol set");
    box_line("");
    box_line(" Templates:");
    box_opt("  -t, --template <NAME|N>", "Apply a preset (pin, wifi, memorable, account, max)");
    box_opt("      --templates", "List the presets");
    box_opt("  -m, --memorable", "Word-word-number phrase");
    box_line("");
    box_line(" Strength:");
    box_opt("      --preview", "Show the estimated strength without generating");
    box_opt("  -S, --score <PASSWORD>", "Score the given password");
    box_opt("      --strategy <NAME>", "composition or analysis (default: analysis)");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress everything except passwords");
    box_opt("      --verbose", "Debug logging on stderr (or set PASSFORGE_LOG)");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from saved settings");
    box_opt("      --save", "Save the effective settings as defaults");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passforge                    Interactive menu");
    box_line("  passforge -l 16              One password, 16 characters");
    box_line("  passforge -l 24 -n 3 -x      Three passwords, no look-alikes");
    box_line("  passforge -t pin             Four-digit PIN");
    box_line("  passforge -m -b              Memorable phrase to clipboard");
    box_line("  passforge -S 'Ab3!Ab3!'      Score an existing password");
    box_line("");
    box_bottom();
    println!();
}

pub fn print_templates() {
    box_top("Templates");
    let catalog = templates::catalog();
    for (i, t) in catalog.iter().enumerate().filter(|(_, t)| !t.is_placeholder()) {
        box_line(&format!(
            "  {i}) {:<18} {:<10} {} chars, {}",
            t.name,
            t.slug,
            t.length,
            paint(t.expected.label, t.expected.color)
        ));
    }
    box_line("");
    box_line(&format!("  {}) {}", templates::PLACEHOLDER, catalog[templates::PLACEHOLDER].name));
    box_bottom();
}

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

fn symbol_set_name(set: &SymbolSet) -> String {
    match set {
        SymbolSet::Extended => "extended".to_string(),
        SymbolSet::Punctuation => "punctuation".to_string(),
        SymbolSet::Custom(chars) => format!("custom \"{chars}\""),
    }
}

pub fn print_main_menu<C: Clipboard>(session: &Session<C>, notice: Option<&Notice>) {
    clear();
    box_top("Passforge");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");

    let password = session
        .password()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "(none yet)".to_string());
    box_line(&format!("Password: {password}"));
    box_line(&format!(
        "Strength: {}",
        strength_gauge(&session.assessment(), GAUGE_WIDTH)
    ));
    let alphabet = session.alphabet();
    box_line(&format!(
        "Entropy:  {:.1} bits • Alphabet: {} chars",
        alphabet.entropy_bits(session.length()),
        alphabet.len()
    ));
    box_rule();

    let selection = session.selection();
    box_line(&format!("{UNDERLINE}General{RESET}:"));
    box_line(&format!("  1) Length: {}", session.length()));
    box_line(&format!("  2) Template: {}", CATALOG[session.template()].name));

    box_line("");
    box_line(&format!("{UNDERLINE}Character types{RESET}:"));
    for (i, class) in CharClass::ORDER.iter().enumerate() {
        box_line(&format!(
            "  {}) {} {}",
            i + 3,
            checkbox(selection.has(*class)),
            class.name()
        ));
    }
    let similar: Vec<String> = SIMILAR.iter().map(char::to_string).collect();
    box_line(&format!(
        "  7) {} Exclude similar ({})",
        checkbox(selection.exclude_similar),
        similar.join(" ")
    ));
    box_line(&format!("  8) Symbol set: {}", symbol_set_name(session.symbols())));

    box_line("");
    box_line(&format!("{UNDERLINE}After generation{RESET}:"));
    box_line(&format!("  9) Strength strategy: {}", session.strategy()));
    box_line(&format!("  10) Auto-copy: {}", session.auto_copy()));

    box_line("");
    box_rule();
    box_line("     c) copy  |  s) save  |  r) defaults  |  h) help  |  q) quit");
    box_bottom();

    match notice {
        Some(notice) => match notice.level {
            NoticeLevel::Info => println!("{}", notice.text),
            NoticeLevel::Warning => print_warning(&notice.text),
            NoticeLevel::Error => print_error(&notice.text),
        },
        None => println!(),
    }
    if !session.can_generate() {
        print_warning("Nothing to generate from: enable a character type.");
    }
    flush();
}
