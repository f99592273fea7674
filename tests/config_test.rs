//! Tests for configuration loading.

use std::fs;
use std::time::Duration;

use tempfile::TempDir;
use wordlebot::{BotConfig, DEFAULT_SOLVER_URL, FinalAttempt, SessionConfig};

/// Writes `content` to `wordlebot.toml` in a fresh temporary directory.
fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("wordlebot.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    (dir, path)
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = BotConfig::load(dir.path().join("absent.toml")).expect("Load failed");

    assert_eq!(config, BotConfig::default());
    assert_eq!(config.solver_url(), DEFAULT_SOLVER_URL);
    assert_eq!(*config.word_length(), 5);
    assert_eq!(*config.max_attempts(), 5);
    assert_eq!(*config.final_attempt(), FinalAttempt::Skip);
    assert_eq!(config.timeout(), None);
}

#[test]
fn test_full_file_is_parsed() {
    let (_dir, path) = write_config(
        r#"solver_url = "http://localhost:8080/api/wordle"
word_length = 6
max_attempts = 6
final_attempt = "contact"
timeout_secs = 10
"#,
    );

    let config = BotConfig::from_file(&path).expect("Parse failed");
    assert_eq!(config.solver_url(), "http://localhost:8080/api/wordle");
    assert_eq!(config.timeout(), Some(Duration::from_secs(10)));

    let session = config.session_config().expect("Valid session config");
    assert_eq!(session.word_length(), 6);
    assert_eq!(session.max_attempts(), 6);
    assert_eq!(session.final_attempt(), FinalAttempt::Contact);
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config("max_attempts = 6\n");

    let config = BotConfig::load(&path).expect("Load failed");
    assert_eq!(*config.max_attempts(), 6);
    assert_eq!(*config.word_length(), 5);
    assert_eq!(config.solver_url(), DEFAULT_SOLVER_URL);
}

#[test]
fn test_invalid_toml_is_error() {
    let (_dir, path) = write_config("this is not valid toml !!!@@@");

    let err = BotConfig::from_file(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_unknown_policy_is_error() {
    let (_dir, path) = write_config("final_attempt = \"maybe\"\n");
    assert!(BotConfig::from_file(&path).is_err());
}

#[test]
fn test_overrides_replace_file_values() {
    let config = BotConfig::default()
        .with_solver_url("http://127.0.0.1:9/api/wordle")
        .with_word_length(4)
        .with_max_attempts(3)
        .with_final_attempt(FinalAttempt::Contact);

    assert_eq!(config.solver_url(), "http://127.0.0.1:9/api/wordle");
    let session = config.session_config().unwrap();
    assert_eq!(session.word_length(), 4);
    assert_eq!(session.max_attempts(), 3);
    assert_eq!(session.final_attempt(), FinalAttempt::Contact);
}

#[test]
fn test_session_config_rejects_zero() {
    assert!(SessionConfig::new(0, 5).is_err());
    assert!(SessionConfig::new(5, 0).is_err());
    assert!(BotConfig::default().with_max_attempts(0).session_config().is_err());
}

#[test]
fn test_policy_parses_from_cli_text() {
    assert_eq!("skip".parse::<FinalAttempt>().unwrap(), FinalAttempt::Skip);
    assert_eq!("contact".parse::<FinalAttempt>().unwrap(), FinalAttempt::Contact);
    assert!("never".parse::<FinalAttempt>().is_err());
}
