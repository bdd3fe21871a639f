//! CLI configuration stored under `.sample_kit/config.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".sample_kit/config.toml";

/// How command reports are printed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// `sample-kit` configuration (TOML).
///
/// Missing fields default to the values in [`KitConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KitConfig {
    pub output: OutputFormat,

    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,

    pub odd_numbers: OddNumbersConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OddNumbersConfig {
    /// Largest limit the `odds` command accepts.
    pub max_limit: i32,
}

impl Default for OddNumbersConfig {
    fn default() -> Self {
        Self {
            max_limit: 1_000_000,
        }
    }
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Plain,
            log_filter: "warn".to_string(),
            odd_numbers: OddNumbersConfig::default(),
        }
    }
}

impl KitConfig {
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(anyhow!("log_filter must be non-empty"));
        }
        if self.odd_numbers.max_limit <= 0 {
            return Err(anyhow!("odd_numbers.max_limit must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `KitConfig::default()`.
pub fn load_config(path: &Path) -> Result<KitConfig> {
    if !path.exists() {
        let cfg = KitConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: KitConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &KitConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, KitConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "output = \"json\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.output, OutputFormat::Json);
        assert_eq!(cfg.log_filter, "warn");
        assert_eq!(cfg.odd_numbers, OddNumbersConfig::default());
    }

    #[test]
    fn rejects_non_positive_max_limit() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "[odd_numbers]\nmax_limit = 0\n").expect("write");

        let err = load_config(&path).expect_err("invalid config");
        assert!(err.to_string().contains("max_limit"));
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("config.toml");
        let cfg = KitConfig {
            output: OutputFormat::Json,
            ..KitConfig::default()
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }
}
