use std::fs;

use tempfile::TempDir;
use the100::{Config, DEFAULT_BASE_URL};

/// A `the100.toml` lying around the working directory is never read.
#[test]
fn test_config_ignores_files_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("the100.toml"),
        r#"
api_key = "from-disk"
base_url = "http://evil.example"
"#,
    )
    .unwrap();
    std::env::set_current_dir(temp_dir.path()).unwrap();

    if let Ok(config) = Config::from_env() {
        assert_ne!(config.api_key, "from-disk");
        assert_ne!(config.base_url, "http://evil.example");
    }

    let config = Config::new("code-key");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_crate_constants() {
    assert_eq!(DEFAULT_BASE_URL, "https://www.the100.io");
    assert_eq!(the100::NAME, "the100");
}
