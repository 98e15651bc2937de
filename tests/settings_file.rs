use std::fs;

use passforge::pass::charset::SymbolSet;
use passforge::strength::Strategy;
use passforge::{Settings, SettingsError};
use tempfile::tempdir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("absent")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested/settings");

    let settings = Settings {
        pass_length: 32,
        number_of_passwords: 5,
        uppercase: false,
        exclude_similar: true,
        symbol_set: SymbolSet::Custom("|,;".to_string()),
        auto_copy: true,
        strategy: Strategy::CompositionWeighted,
        template: 2,
        ..Settings::default()
    };
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_wrong_field_count_is_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings");
    fs::write(&path, "20,1,true\n").unwrap();
    assert!(matches!(
        Settings::load_from(&path),
        Err(SettingsError::Malformed(_))
    ));
}

#[test]
fn test_bad_value_is_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings");
    fs::write(
        &path,
        "twenty,1,true,true,true,true,false,extended,false,analysis,0\n",
    )
    .unwrap();
    let err = Settings::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("length"));
}

#[test]
fn test_empty_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings");
    fs::write(&path, "").unwrap();
    assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
}
