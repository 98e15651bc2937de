//! Settings file persistence.
//!
//! One line of comma-separated fields. `|` escapes a literal `,` or `|`
//! inside a field (custom symbol sets may contain both).

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use super::Settings;
use crate::error::SettingsError;

const FIELDS: usize = 11;

pub fn save(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let symbol_set = escape(&settings.symbol_set.to_string());

    let data = format!(
        "{},{},{},{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.lowercase,
        settings.uppercase,
        settings.digits,
        settings.symbols,
        settings.exclude_similar,
        symbol_set,
        settings.auto_copy,
        settings.strategy,
        settings.template,
    );

    file.write_all(data.as_bytes())?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(path: &Path, settings: &mut Settings) -> Result<(), SettingsError> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(());
    }

    let content = fs::read_to_string(path)?;
    let line = content.lines().next().unwrap_or("").trim_end();
    if line.is_empty() {
        return Ok(());
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        return Err(SettingsError::Malformed(format!(
            "expected {FIELDS} fields, found {}",
            parts.len()
        )));
    }

    settings.pass_length = field(&parts, 0, "length")?;
    settings.number_of_passwords = field(&parts, 1, "number")?;
    settings.lowercase = field(&parts, 2, "lowercase")?;
    settings.uppercase = field(&parts, 3, "uppercase")?;
    settings.digits = field(&parts, 4, "digits")?;
    settings.symbols = field(&parts, 5, "symbols")?;
    settings.exclude_similar = field(&parts, 6, "exclude_similar")?;
    settings.symbol_set = field(&parts, 7, "symbol_set")?;
    settings.auto_copy = field(&parts, 8, "auto_copy")?;
    settings.strategy = field(&parts, 9, "strategy")?;
    settings.template = field(&parts, 10, "template")?;

    Ok(())
}

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passforge/settings")
}

fn field<T: FromStr>(parts: &[String], index: usize, name: &str) -> Result<T, SettingsError> {
    parts[index]
        .parse()
        .map_err(|_| SettingsError::Malformed(format!("bad {name}: '{}'", parts[index])))
}

fn escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_escaped() {
        assert_eq!(split_escaped("a,b,,c", ','), vec!["a", "b", "", "c"]);
        assert_eq!(split_escaped("x|,y,z||", ','), vec!["x,y", "z|"]);
        assert_eq!(split_escaped("", ','), vec![""]);
    }

    #[test]
    fn test_escape_inverts_split() {
        let raw = "custom:,|;";
        assert_eq!(split_escaped(&escape(raw), ','), vec![raw]);
    }

    #[test]
    fn test_default_path() {
        assert!(default_path().ends_with(".config/passforge/settings"));
    }
}
