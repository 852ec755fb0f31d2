//! Runtime configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `HEROFORGE_LOG` | `heroforge=info` | tracing `EnvFilter` directive |
//! | `HEROFORGE_OUTPUT` | `text` | `text` or `json` |
//! | `HEROFORGE_ROSTER` | all archetypes | comma-separated archetype names |
//!
//! `RUST_LOG` takes precedence over `HEROFORGE_LOG` when set.

use std::path::Path;
use std::str::FromStr;

use heroforge_domain::Archetype;
use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "heroforge=info";

/// Errors raised while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// How forged characters are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'text' or 'json', got '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeConfig {
    pub log_filter: String,
    pub output: OutputFormat,
    pub roster: Vec<Archetype>,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::Text,
            roster: Archetype::all().to_vec(),
        }
    }
}

impl ForgeConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(filter) = get("RUST_LOG").or_else(|| get("HEROFORGE_LOG")) {
            config.log_filter = filter;
        }

        if let Some(output) = get("HEROFORGE_OUTPUT") {
            config.output = output
                .parse()
                .map_err(|reason: String| ConfigError::invalid("HEROFORGE_OUTPUT", &output, reason))?;
        }

        if let Some(roster) = get("HEROFORGE_ROSTER") {
            config.roster = parse_roster(&roster)?;
        }

        Ok(config)
    }
}

fn parse_roster(raw: &str) -> Result<Vec<Archetype>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<Archetype>()
                .map_err(|e| ConfigError::invalid("HEROFORGE_ROSTER", entry, e.to_string()))
        })
        .collect()
}

/// Loads `.env.local` then `.env` from the workspace root, if present.
///
/// Variables already set in the process environment win.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ForgeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ForgeConfig::default());
        assert_eq!(config.roster.len(), 4);
    }

    #[test]
    fn test_reads_output_and_roster() {
        let config = ForgeConfig::from_lookup(lookup(&[
            ("HEROFORGE_OUTPUT", "JSON"),
            ("HEROFORGE_ROSTER", "healer, melee-tank,"),
        ]))
        .unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.roster, vec![Archetype::Healer, Archetype::MeleeTank]);
    }

    #[test]
    fn test_rust_log_overrides_heroforge_log() {
        let config = ForgeConfig::from_lookup(lookup(&[
            ("RUST_LOG", "debug"),
            ("HEROFORGE_LOG", "warn"),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, "debug");

        let config = ForgeConfig::from_lookup(lookup(&[("HEROFORGE_LOG", "warn")])).unwrap();
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = ForgeConfig::from_lookup(lookup(&[
            ("HEROFORGE_OUTPUT", "  "),
            ("HEROFORGE_ROSTER", ""),
        ]))
        .unwrap();
        assert_eq!(config, ForgeConfig::default());
    }

    #[test]
    fn test_invalid_output_is_rejected() {
        let err = ForgeConfig::from_lookup(lookup(&[("HEROFORGE_OUTPUT", "yaml")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "HEROFORGE_OUTPUT",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_archetype_is_rejected() {
        let err =
            ForgeConfig::from_lookup(lookup(&[("HEROFORGE_ROSTER", "healer,bard")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for HEROFORGE_ROSTER: bard (Parse error: Unknown archetype: bard)"
        );
    }
}
