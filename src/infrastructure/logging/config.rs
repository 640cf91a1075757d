use std::path::PathBuf;

use crate::domain::models::LoggingConfig;
use crate::infrastructure::config::ConfigError;
use crate::utils::labels::{labeled_enum, Labeled};

/// Resolved logging settings with typed format and rotation.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format
    pub format: LogFormat,

    /// Directory for log files (optional, if None logs only to stderr)
    pub log_dir: Option<PathBuf>,

    /// Log rotation policy for files in `log_dir`
    pub rotation: RotationPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

labeled_enum!(LogFormat {
    LogFormat::Json => "json",
    LogFormat::Pretty => "pretty",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}

labeled_enum!(RotationPolicy {
    RotationPolicy::Daily => "daily",
    RotationPolicy::Hourly => "hourly",
    RotationPolicy::Never => "never",
});

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

impl TryFrom<&LoggingConfig> for LogConfig {
    type Error = ConfigError;

    fn try_from(config: &LoggingConfig) -> Result<Self, Self::Error> {
        let format = LogFormat::from_label(&config.format)
            .ok_or_else(|| ConfigError::InvalidLogFormat(config.format.clone()))?;
        let rotation = RotationPolicy::from_label(&config.rotation)
            .ok_or_else(|| ConfigError::InvalidRotation(config.rotation.clone()))?;

        Ok(Self {
            level: config.level.clone(),
            format,
            log_dir: config.log_dir.clone(),
            rotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_logging_config() {
        let logging = LoggingConfig {
            level: "debug".to_string(),
            format: "Json".to_string(),
            log_dir: Some(PathBuf::from("/tmp/logs")),
            rotation: "never".to_string(),
        };

        let config = LogConfig::try_from(&logging).unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.rotation, RotationPolicy::Never);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let logging = LoggingConfig {
            format: "xml".to_string(),
            ..LoggingConfig::default()
        };
        assert!(matches!(
            LogConfig::try_from(&logging),
            Err(ConfigError::InvalidLogFormat(f)) if f == "xml"
        ));
    }

    #[test]
    fn test_labels_round_trip() {
        assert_eq!(LogFormat::Pretty.label(), "pretty");
        assert_eq!(RotationPolicy::from_label("HOURLY"), Some(RotationPolicy::Hourly));
        assert_eq!(RotationPolicy::labels(), &["daily", "hourly", "never"]);
    }
}
