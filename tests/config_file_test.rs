//! Tests for loading configuration from disk.

use std::io::Write;
use strictly_tictactoe_console::{GameConfig, Marker, PlayerOverrides};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config.log_filter(), "warn");
    assert_eq!(
        config.resolve_players(&PlayerOverrides::default()).expect("resolves"),
        None
    );
}

#[test]
fn test_players_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r##"
log_filter = "debug"

[player_one]
name = "Ann"
marker = "#"

[player_two]
name = "Ben"
marker = "@"
"##
    )
    .expect("write config");

    let config = GameConfig::load_or_default(file.path()).expect("valid config");
    assert_eq!(config.log_filter(), "debug");

    let players = config
        .resolve_players(&PlayerOverrides::default())
        .expect("resolves")
        .expect("both names known");
    assert_eq!(*players.first().marker(), Marker::new('#'));
    assert_eq!(*players.second().marker(), Marker::new('@'));
}

#[test]
fn test_unreadable_toml_reports_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "this is not toml").expect("write config");

    let err = GameConfig::from_file(file.path()).expect_err("invalid toml");
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}

#[test]
fn test_digit_marker_in_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
[player_one]
name = "Ann"
marker = "7"

[player_two]
name = "Ben"
marker = "O"
"#
    )
    .expect("write config");

    let config = GameConfig::load_or_default(file.path()).expect("valid config");
    let err = config
        .resolve_players(&PlayerOverrides::default())
        .expect_err("digit marker");
    assert!(err.message.contains("cannot be a digit or whitespace"));
}
