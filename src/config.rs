//! Engine settings read from a TOML file, for example
//!
//! ```toml
//! heuristic = "zero"
//! max-steps = 500
//! time-limit = "2s 500ms"
//! ```
//!
//! Every key is optional. Values given on the command line take precedence.

use crate::search::{search_engines::TerminationCondition, HeuristicName};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct EngineConfig {
    #[serde(default)]
    pub heuristic: Option<HeuristicName>,
    #[serde(default)]
    pub max_steps: Option<usize>,
    /// Wall-clock budget, written as a human readable duration such as
    /// `"1m 30s"`.
    #[serde(default, deserialize_with = "deserialize_duration")]
    pub time_limit: Option<Duration>,
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|text| humantime::parse_duration(&text).map_err(serde::de::Error::custom))
        .transpose()
}

impl EngineConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Replace every setting for which `overrides` has a value.
    pub fn merged_with(self, overrides: EngineConfig) -> Self {
        Self {
            heuristic: overrides.heuristic.or(self.heuristic),
            max_steps: overrides.max_steps.or(self.max_steps),
            time_limit: overrides.time_limit.or(self.time_limit),
        }
    }

    pub fn heuristic(&self) -> HeuristicName {
        self.heuristic.unwrap_or_default()
    }

    pub fn termination_condition(&self) -> TerminationCondition {
        TerminationCondition::new(self.max_steps, self.time_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_full_config() {
        let config = EngineConfig::from_toml(
            r#"
            heuristic = "zero"
            max-steps = 500
            time-limit = "2s 500ms"
            "#,
        )
        .unwrap();
        assert_eq!(config.heuristic(), HeuristicName::ZeroHeuristic);
        assert_eq!(config.max_steps, Some(500));
        assert_eq!(config.time_limit, Some(Duration::from_millis(2500)));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.heuristic(), HeuristicName::Euclidean);
    }

    #[test]
    fn reject_bad_values() {
        assert!(matches!(
            EngineConfig::from_toml(r#"time-limit = "soon""#),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml(r#"heuristic = "manhattan""#),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml("max_steps = 3"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max-steps = 12").unwrap();
        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.max_steps, Some(12));
        assert_eq!(config.time_limit, None);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = EngineConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn overrides_take_precedence() {
        let file = EngineConfig {
            heuristic: Some(HeuristicName::ZeroHeuristic),
            max_steps: Some(10),
            time_limit: None,
        };
        let flags = EngineConfig {
            heuristic: None,
            max_steps: Some(3),
            time_limit: Some(Duration::from_secs(1)),
        };
        let merged = file.merged_with(flags);
        assert_eq!(merged.heuristic(), HeuristicName::ZeroHeuristic);
        assert_eq!(merged.max_steps, Some(3));
        assert_eq!(merged.time_limit, Some(Duration::from_secs(1)));
    }
}
