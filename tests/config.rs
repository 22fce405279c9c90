use student_records::config::Config;
use student_records::constants::{DEFAULT_DATABASE_URL, DEFAULT_PAGE_SIZE};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
    assert_eq!(config.pagination.default_page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.pagination.max_page_size, 100);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Empty database url should fail
    config.database.url = "  ".to_string();
    assert!(config.validate().is_err());

    // Reset and test a zero-sized pool
    config = Config::default();
    config.database.max_connections = 0;
    assert!(config.validate().is_err());

    // Default page size above the maximum should fail
    config = Config::default();
    config.pagination.default_page_size = 500;
    assert!(config.validate().is_err());

    // Unknown log level should fail
    config = Config::default();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_effective_page_size() {
    let config = Config::default();
    assert_eq!(config.pagination.effective_page_size(None), 5);
    assert_eq!(config.pagination.effective_page_size(Some(20)), 20);
    assert_eq!(config.pagination.effective_page_size(Some(10_000)), 100);
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_page_size = 5"));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[database]
url = "sqlite://other.db?mode=rwc"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.database.url, "sqlite://other.db?mode=rwc");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.pagination.default_page_size, 5);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.database.url, default_config.database.url);
    assert_eq!(config.pagination.max_page_size, default_config.pagination.max_page_size);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_generate_config_creates_directory_and_loads_back() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("student_records_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# student-records Configuration File"));

    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.database.url, DEFAULT_DATABASE_URL);

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("student_records_test_invalid_config");
    fs::create_dir_all(&temp_dir).unwrap();
    let config_path = temp_dir.join("config.toml");
    fs::write(&config_path, "[pagination]\nmax_page_size = 0\n").unwrap();

    assert!(Config::load_from_file(&config_path).is_err());

    let _ = fs::remove_dir_all(&temp_dir);
}
