//! NIETBot configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{NietBotError, Result};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NietBotConfig {
    /// Institution name used in the fixed narrative answers.
    #[serde(default = "default_institution")]
    pub institution: String,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
}

fn default_institution() -> String { "NIET".into() }

impl Default for NietBotConfig {
    fn default() -> Self {
        Self {
            institution: default_institution(),
            gateway: GatewayConfig::default(),
            data: DataConfig::default(),
            matcher: MatcherConfig::default(),
        }
    }
}

impl NietBotConfig {
    /// Load config from `$NIETBOT_CONFIG`, else the default path (~/.nietbot/config.toml).
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = std::env::var("NIETBOT_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_path());
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NietBotError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| NietBotError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no request could work with.
    pub fn validate(&self) -> Result<()> {
        let t = self.matcher.threshold;
        if !(0.0..=1.0).contains(&t) {
            return Err(NietBotError::Config(format!(
                "matcher.threshold must be within [0, 1], got {t}"
            )));
        }
        if self.gateway.port == 0 {
            return Err(NietBotError::Config("gateway.port must not be 0".into()));
        }
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get the NIETBot home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".nietbot")
    }
}

/// Gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
    /// Allowed CORS origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_port() -> u16 { 5023 }
fn default_host() -> String { "127.0.0.1".into() }

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            cors_origins: vec![],
        }
    }
}

/// Locations of the training corpus and the handbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_training_path")]
    pub training_path: String,
    #[serde(default = "default_handbook_path")]
    pub handbook_path: String,
}

fn default_training_path() -> String { "data/niet_training_questions.json".into() }
fn default_handbook_path() -> String { "data/NIET_Student_Handbook.json".into() }

impl DataConfig {
    pub fn training_path(&self) -> PathBuf {
        expand_path(&self.training_path)
    }

    pub fn handbook_path(&self) -> PathBuf {
        expand_path(&self.handbook_path)
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            training_path: default_training_path(),
            handbook_path: default_handbook_path(),
        }
    }
}

/// Intent matcher tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Best scores strictly below this fall back to `general_query`.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 { 0.45 }

impl Default for MatcherConfig {
    fn default() -> Self {
        Self { threshold: default_threshold() }
    }
}

fn expand_path(p: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(p).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NietBotConfig::default();
        assert_eq!(config.institution, "NIET");
        assert_eq!(config.gateway.port, 5023);
        assert!((config.matcher.threshold - 0.45).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            institution = "Test Institute"

            [gateway]
            port = 8080
            cors_origins = ["http://localhost:3000"]

            [data]
            training_path = "/srv/bot/questions.json"

            [matcher]
            threshold = 0.6
        "#;

        let config: NietBotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.institution, "Test Institute");
        assert_eq!(config.gateway.port, 8080);
        assert_eq!(config.gateway.host, "127.0.0.1");
        assert_eq!(config.gateway.cors_origins.len(), 1);
        assert_eq!(config.data.training_path(), PathBuf::from("/srv/bot/questions.json"));
        assert_eq!(config.data.handbook_path, "data/NIET_Student_Handbook.json");
        assert!((config.matcher.threshold - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config: NietBotConfig = toml::from_str("").unwrap();
        assert_eq!(config.gateway.port, 5023);
        assert_eq!(config.data.training_path, "data/niet_training_questions.json");
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let mut config = NietBotConfig::default();
        config.matcher.threshold = 1.5;
        assert!(matches!(config.validate(), Err(NietBotError::Config(_))));
    }

    #[test]
    fn test_load_from_invalid_file() {
        let path = std::env::temp_dir().join("nietbot-test-bad-config.toml");
        std::fs::write(&path, "[matcher]\nthreshold = -0.1\n").unwrap();
        assert!(NietBotConfig::load_from(&path).is_err());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_home_dir() {
        let home = NietBotConfig::home_dir();
        assert!(home.to_string_lossy().contains("nietbot"));
    }
}
