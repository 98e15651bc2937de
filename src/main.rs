use std::env;
use std::process::ExitCode;

mod cli;
mod clipboard;
mod exits;
mod terminal;
mod tui;

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    }
}
