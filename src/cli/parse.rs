use thiserror::Error;

use super::CliFlags;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "--verbose" => flags.verbose = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "-x" | "--exclude-similar" => flags.exclude_similar = true,
            "--punctuation" => flags.punctuation = true,
            "-m" | "--memorable" => flags.memorable = true,
            "--templates" => flags.list_templates = true,
            "--preview" => flags.preview = true,
            "-l" | "--length" => flags.length = Some(number(args, &mut i)?),
            "-n" | "--number" => flags.number = Some(number(args, &mut i)?),
            "--special" => flags.special = Some(value(args, &mut i)?),
            "-t" | "--template" => flags.template = Some(value(args, &mut i)?),
            "--strategy" => flags.strategy = Some(value(args, &mut i)?),
            "-S" | "--score" => flags.score = Some(value(args, &mut i)?),
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Consume the argument after flag `args[*i]`.
fn value(args: &[String], i: &mut usize) -> Result<String, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number(args: &[String], i: &mut usize) -> Result<usize, ParseError> {
    let raw = value(args, i)?;
    raw.parse().map_err(|_| ParseError::InvalidNumber(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passforge")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_values() {
        let flags = parse(&args(&["-l", "16", "-n", "3", "-t", "pin", "--no-symbols"])).unwrap();
        assert_eq!(flags.length, Some(16));
        assert_eq!(flags.number, Some(3));
        assert_eq!(flags.template.as_deref(), Some("pin"));
        assert!(flags.no_symbols);
        assert!(flags.changes_options());
    }

    #[test]
    fn test_parse_score_keeps_dashes() {
        let flags = parse(&args(&["-S", "-x-"])).unwrap();
        assert_eq!(flags.score.as_deref(), Some("-x-"));
        assert!(!flags.exclude_similar);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse(&args(&["-l", "abc"])).unwrap_err(),
            ParseError::InvalidNumber("abc".to_string())
        );
        assert_eq!(
            parse(&args(&["--length"])).unwrap_err(),
            ParseError::MissingValue("--length".to_string())
        );
        assert_eq!(
            parse(&args(&["--bogus"])).unwrap_err(),
            ParseError::UnknownArg("--bogus".to_string())
        );
    }

    #[test]
    fn test_info_only() {
        assert!(parse(&args(&["--templates"])).unwrap().is_info_only());
        assert!(!parse(&args(&["-m"])).unwrap().is_info_only());
    }
}
