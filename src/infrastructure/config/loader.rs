use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;
use crate::infrastructure::logging::{LogFormat, RotationPolicy};
use crate::utils::Labeled;

/// Project directory holding config, database and stored files.
pub const PROJECT_DIR: &str = ".mld";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: {labels}", labels = LogFormat::labels().join(", "))]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: {labels}", labels = RotationPolicy::labels().join(", "))]
    InvalidRotation(String),

    #[error("Database path cannot be empty")]
    EmptyDatabasePath,

    #[error("Invalid max_connections: {0}. Must be at least 1")]
    InvalidMaxConnections(u32),

    #[error("File base path cannot be empty")]
    EmptyFileBasePath,

    #[error("Invalid id_length: {0}. Must be at least 1")]
    InvalidIdLength(usize),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .mld/config.yaml (project config, created by init)
    /// 3. .mld/local.yaml (project local overrides, optional)
    /// 4. Environment variables (MLD_* prefix, `__` separates sections)
    pub fn load() -> Result<Config> {
        let project_dir = Path::new(PROJECT_DIR);
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(project_dir.join("config.yaml")))
            .merge(Yaml::file(project_dir.join("local.yaml")))
            .merge(Env::prefixed("MLD_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honouring environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("MLD_").split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.database.path.is_empty() {
            return Err(ConfigError::EmptyDatabasePath);
        }

        if config.database.max_connections == 0 {
            return Err(ConfigError::InvalidMaxConnections(
                config.database.max_connections,
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        if LogFormat::from_label(&config.logging.format).is_none() {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if RotationPolicy::from_label(&config.logging.rotation).is_none() {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        if config.files.base_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyFileBasePath);
        }

        if config.sessions.id_length == 0 {
            return Err(ConfigError::InvalidIdLength(config.sessions.id_length));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.database.path, ".mld/mld.db");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.files.base_path, PathBuf::from(".mld/files"));
        assert_eq!(config.sessions.id_length, 12);
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
database:
  path: /custom/path.db
  max_connections: 3
logging:
  level: debug
  format: json
  rotation: hourly
files:
  base_path: /srv/files
sessions:
  id_length: 16
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.database.path, "/custom/path.db");
        assert_eq!(config.database.max_connections, 3);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.rotation, "hourly");
        assert_eq!(config.files.base_path, PathBuf::from("/srv/files"));
        assert_eq!(config.sessions.id_length, 16);
        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.database.path = String::new();
        assert!(matches!(ConfigLoader::validate(&config), Err(ConfigError::EmptyDatabasePath)));

        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(matches!(ConfigLoader::validate(&config), Err(ConfigError::InvalidLogFormat(_))));

        let mut config = Config::default();
        config.logging.rotation = "weekly".to_string();
        assert!(matches!(ConfigLoader::validate(&config), Err(ConfigError::InvalidRotation(_))));

        let mut config = Config::default();
        config.sessions.id_length = 0;
        assert!(matches!(ConfigLoader::validate(&config), Err(ConfigError::InvalidIdLength(0))));
    }

    #[test]
    fn test_label_errors_list_accepted_values() {
        let format = ConfigError::InvalidLogFormat("xml".to_string()).to_string();
        assert_eq!(format, "Invalid log format: xml. Must be one of: json, pretty");

        let rotation = ConfigError::InvalidRotation("weekly".to_string()).to_string();
        assert_eq!(rotation, "Invalid log rotation: weekly. Must be one of: daily, hourly, never");
    }

    #[test]
    fn test_label_lookup_ignores_case() {
        let mut config = Config::default();
        config.logging.format = "JSON".to_string();
        config.logging.level = "WARN".to_string();
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "database:\n  path: from-file.db\n  max_connections: 2").unwrap();

        temp_env::with_var("MLD_DATABASE__PATH", Some("from-env.db"), || {
            let config = ConfigLoader::load_from_file(file.path()).unwrap();
            assert_eq!(config.database.path, "from-env.db");
            assert_eq!(config.database.max_connections, 2);
        });
    }

    #[test]
    fn test_invalid_file_value_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "database:\n  max_connections: 0").unwrap();

        temp_env::with_var_unset("MLD_DATABASE__MAX_CONNECTIONS", || {
            assert!(ConfigLoader::load_from_file(file.path()).is_err());
        });
    }
}
