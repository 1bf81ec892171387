use launchgen_config::{init_tracing, ConfigError, LaunchgenConfig, LoggingConfig};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn loads_logging_table_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("launchgen.toml");
    std::fs::write(
        &path,
        r#"
[logging]
level = "debug"
json = true
stderr = false
file = "/tmp/launchgen.log"
"#,
    )
    .unwrap();

    let config = LaunchgenConfig::load_from_path(&path).expect("config should load");
    assert_eq!(
        config.logging,
        LoggingConfig {
            level: "debug".to_string(),
            json: true,
            stderr: false,
            file: Some(PathBuf::from("/tmp/launchgen.log")),
        }
    );
}

#[test]
fn rejects_unknown_keys() {
    let err = LaunchgenConfig::load_from_str("[logging]\nlevle = \"debug\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "{err:?}");
    assert!(err.to_string().contains("levle"), "{err}");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = LaunchgenConfig::load_from_path(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => {
            assert_eq!(reported, path.display().to_string())
        }
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn init_tracing_installs_once() {
    let dir = tempdir().unwrap();
    let logging = LoggingConfig {
        level: "info".to_string(),
        stderr: false,
        file: Some(dir.path().join("launchgen.log")),
        ..LoggingConfig::default()
    };

    let first = init_tracing(&logging);
    let second = init_tracing(&logging);
    assert!(!second);
    // No other test in this binary installs a subscriber.
    assert!(first);

    tracing::info!(target: "launchgen.test", "hello from the test");
    let text = std::fs::read_to_string(dir.path().join("launchgen.log")).unwrap();
    assert!(text.contains("hello from the test"), "{text}");
}
