//! quizdeck configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizdeck configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizdeckConfig {
    /// Question source used by `play` when `-f` is not given.
    #[serde(default = "default_play_source")]
    pub play_source: PathBuf,
    /// Question source used by `timed` when `-f` is not given.
    #[serde(default = "default_timed_source")]
    pub timed_source: PathBuf,
    /// Shuffle questions when `-s` is not given.
    #[serde(default)]
    pub shuffle: bool,
    /// Countdown for `play`, in seconds (None = untimed).
    #[serde(default)]
    pub play_duration_secs: Option<u64>,
    /// Countdown for `timed`, in seconds.
    #[serde(default = "default_timed_duration")]
    pub timed_duration_secs: u64,
    /// Interval between UI ticks in milliseconds.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_play_source() -> PathBuf {
    PathBuf::from("cards.json")
}
fn default_timed_source() -> PathBuf {
    PathBuf::from("problems.csv")
}
fn default_timed_duration() -> u64 {
    30
}
fn default_tick_rate() -> u64 {
    500
}

impl Default for QuizdeckConfig {
    fn default() -> Self {
        Self {
            play_source: default_play_source(),
            timed_source: default_timed_source(),
            shuffle: false,
            play_duration_secs: None,
            timed_duration_secs: default_timed_duration(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizdeck.toml` in the current directory
/// 2. `~/.config/quizdeck/config.toml`
///
/// Environment variable override: `QUIZDECK_SOURCE` (both sources).
pub fn load_config_from(path: Option<&Path>) -> Result<QuizdeckConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizdeck.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QuizdeckConfig::default(),
    };

    if let Ok(source) = std::env::var("QUIZDECK_SOURCE") {
        if !source.is_empty() {
            config.play_source = PathBuf::from(&source);
            config.timed_source = PathBuf::from(source);
        }
    }

    anyhow::ensure!(config.tick_rate_ms > 0, "tick_rate_ms must be at least 1");

    Ok(config)
}

/// Parse a TOML config string (useful for testing).
pub fn parse_config_str(content: &str) -> Result<QuizdeckConfig> {
    Ok(toml::from_str::<QuizdeckConfig>(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizdeck"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizdeckConfig::default();
        assert_eq!(config.play_source, PathBuf::from("cards.json"));
        assert_eq!(config.timed_source, PathBuf::from("problems.csv"));
        assert_eq!(config.timed_duration_secs, 30);
        assert!(config.play_duration_secs.is_none());
        assert!(!config.shuffle);
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config_str(
            r#"
shuffle = true
play_duration_secs = 90
"#,
        )
        .unwrap();
        assert!(config.shuffle);
        assert_eq!(config.play_duration_secs, Some(90));
        assert_eq!(config.tick_rate_ms, 500);
        assert_eq!(config.play_source, PathBuf::from("cards.json"));
    }

    #[test]
    fn parse_rejects_wrong_types() {
        assert!(parse_config_str("shuffle = \"yes please\"").is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from(Some(Path::new("definitely-missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizdeck.toml");
        std::fs::write(&path, "timed_duration_secs = 5\ntimed_source = \"maths.csv\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.timed_duration_secs, 5);
        if std::env::var("QUIZDECK_SOURCE").is_err() {
            assert_eq!(config.timed_source, PathBuf::from("maths.csv"));
        }
    }
}
