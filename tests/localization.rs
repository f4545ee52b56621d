use std::collections::HashMap;

use tempfile::TempDir;

use common_core::language::MatchMode;
use common_core::localization::{LocalizationError, Localizer};

fn strings_dir(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (name, content) in files {
        std::fs::write(temp_dir.path().join(name), content).unwrap();
    }
    temp_dir
}

#[test]
fn load_dir_orders_tables_by_file_name() {
    let temp_dir = strings_dir(&[
        ("fr_FR.json", r#"{"hello": "Bonjour"}"#),
        ("de.json", r#"{"hello": "Hallo"}"#),
        ("de_CH.json", r#"{"hello": "Grüezi"}"#),
        ("README.txt", "not a table"),
    ]);

    let localizer = Localizer::load_dir(temp_dir.path()).unwrap();

    assert_eq!(
        localizer.languages().collect::<Vec<_>>(),
        ["de", "de_CH", "fr_FR"]
    );
}

#[test]
fn select_and_localize_with_variables() {
    let temp_dir = strings_dir(&[
        ("de.json", r#"{"welcome": "Willkommen, ${user}!"}"#),
        ("en.json", r#"{"welcome": "Welcome, ${user}!"}"#),
    ]);
    let mut localizer = Localizer::load_dir(temp_dir.path()).unwrap();

    let selected = localizer.select(["it", "de_AT"], MatchMode::AllowPartiallyMatching);
    assert_eq!(selected, Some("de"));

    let vars = HashMap::from([("user".to_string(), "Ada".to_string())]);
    assert_eq!(localizer.localized("welcome", &vars), "Willkommen, Ada!");
    assert_eq!(localizer.localized("unknown_key", &vars), "unknown_key");
}

#[test]
fn load_dir_fails_on_invalid_table() {
    let temp_dir = strings_dir(&[("de.json", r#"{"welcome": 42}"#)]);

    let result = Localizer::load_dir(temp_dir.path());

    assert!(matches!(result, Err(LocalizationError::NotAnObject(_))));
}

#[test]
fn load_dir_fails_on_missing_directory() {
    let temp_dir = TempDir::new().unwrap();

    let result = Localizer::load_dir(&temp_dir.path().join("missing"));

    assert!(matches!(result, Err(LocalizationError::Io { .. })));
}
