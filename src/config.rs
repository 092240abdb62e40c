use std::path::Path;

use log::warn;

use crate::ai::LearnerConfig;
use crate::error::ConfigError;
use crate::training::session::SessionConfig;
use crate::training::stats::StatsConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub stats: StatsConfig,
    pub learner: LearnerConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.games == 0 {
            return Err(ConfigError::Validation(
                "session.games must be > 0".into(),
            ));
        }
        if let Some(first) = self.session.first_mover {
            if first.seat().is_none() {
                return Err(ConfigError::Validation(
                    "session.first_mover must be \"one\" or \"two\"".into(),
                ));
            }
        }

        if !(0.0..=1.0).contains(&self.learner.epsilon) {
            return Err(ConfigError::Validation(
                "learner.epsilon must be in [0, 1]".into(),
            ));
        }
        if self.learner.win_reward < self.learner.lose_reward {
            return Err(ConfigError::Validation(
                "learner.win_reward must be >= learner.lose_reward".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
