mod context;
mod flags;
mod parse;
mod prompts;

use std::process::ExitCode;

pub use context::{Context, Exit};
pub use flags::CliFlags;
pub use parse::parse;

/// Run in client mode. 0 on success, 1 when generation failed, 2 on usage
/// errors.
pub fn run(args: Vec<String>) -> ExitCode {
    let flags = match parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Try --help");
            return ExitCode::from(2);
        }
    };

    passforge::logging::init(flags.verbose);
    prompts::set_quiet(flags.quiet);

    match Context::new(flags).run() {
        Ok(()) | Err(Exit::Done) => ExitCode::SUCCESS,
        Err(Exit::Usage(msg)) => {
            prompts::error(&msg);
            ExitCode::from(2)
        }
        Err(Exit::Failed(msg)) => {
            prompts::error(&msg);
            ExitCode::from(1)
        }
    }
}
