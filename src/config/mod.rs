//! Configuration module
//!
//! Handles locating, loading and saving mdcompare.toml configuration files.
//! Defines Config, Titles, Output and SinkKind types.

mod types;

pub use types::{Config, SinkKind, DEFAULT_LEFT_TITLE, DEFAULT_RIGHT_TITLE};

use crate::error::{MdCompareError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "mdcompare.toml";

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "MDCOMPARE_CONFIG";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        MdCompareError::Config(format!(
            "Cannot read config from '{}': {}. Run 'mdcompare config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| MdCompareError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

/// Resolve the effective configuration.
///
/// An explicit path wins, then `MDCOMPARE_CONFIG`, then `./mdcompare.toml`
/// when present. Falls back to defaults if none of those apply.
pub fn resolve(explicit: Option<PathBuf>) -> Result<Config> {
    let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);

    if let Some(path) = explicit.or(env_path) {
        log::debug!("Loading config from {}", path.display());
        return load(&path);
    }

    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.is_file() {
        log::debug!("Loading config from {}", local.display());
        return load(&local);
    }

    log::debug!("No config file found, using defaults");
    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("mdcompare.toml");

        let config = Config::default();
        save(&config, &config_path).unwrap();

        let loaded = load(&config_path).unwrap();
        assert_eq!(loaded.titles.left, "BEFORE OPTIMIZATION");
        assert_eq!(loaded.output.sink, SinkKind::Stdout);
    }

    #[test]
    fn test_load_missing_config() {
        let result = load(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Run 'mdcompare config init'"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("mdcompare.toml");
        fs::write(&config_path, "[titles\nleft = ").unwrap();

        let err = load(&config_path).unwrap_err();
        assert!(matches!(err, MdCompareError::TomlParse(_)));
    }

    #[test]
    fn test_save_creates_directories() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("nested/dir/mdcompare.toml");

        save(&Config::default(), &config_path).unwrap();

        assert!(config_path.exists());
    }

    #[test]
    fn test_roundtrip() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("mdcompare.toml");

        let mut config = Config::default();
        config.titles.left = "v1 prompt".to_string();
        config.output.sink = SinkKind::File;
        config.output.path = Some(temp.path().join("out.html"));

        save(&config, &config_path).unwrap();
        let loaded = load(&config_path).unwrap();

        assert_eq!(loaded.titles.left, "v1 prompt");
        assert_eq!(loaded.output.sink, SinkKind::File);
        assert_eq!(loaded.output.path, config.output.path);
    }

    #[test]
    #[serial]
    fn test_resolve_prefers_explicit_path() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("explicit.toml");
        let from_env = temp.path().join("env.toml");

        let mut config = Config::default();
        config.titles.left = "explicit".to_string();
        save(&config, &explicit).unwrap();
        config.titles.left = "env".to_string();
        save(&config, &from_env).unwrap();

        std::env::set_var(CONFIG_ENV_VAR, &from_env);
        let resolved = resolve(Some(explicit)).unwrap();
        std::env::remove_var(CONFIG_ENV_VAR);

        assert_eq!(resolved.titles.left, "explicit");
    }

    #[test]
    #[serial]
    fn test_resolve_uses_env_var() {
        let temp = TempDir::new().unwrap();
        let from_env = temp.path().join("env.toml");

        let mut config = Config::default();
        config.titles.right = "from env".to_string();
        save(&config, &from_env).unwrap();

        std::env::set_var(CONFIG_ENV_VAR, &from_env);
        let resolved = resolve(None).unwrap();
        std::env::remove_var(CONFIG_ENV_VAR);

        assert_eq!(resolved.titles.right, "from env");
    }

    #[test]
    #[serial]
    fn test_resolve_env_var_missing_file_is_error() {
        std::env::set_var(CONFIG_ENV_VAR, "/nonexistent/mdcompare.toml");
        let result = resolve(None);
        std::env::remove_var(CONFIG_ENV_VAR);

        assert!(matches!(result, Err(MdCompareError::Config(_))));
    }
}
