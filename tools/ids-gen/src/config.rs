//! ids-gen.toml configuration parsing

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the configuration file at the workspace root
pub const CONFIG_FILE: &str = "ids-gen.toml";

/// ids-gen.toml structure. Paths are relative to the workspace root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Header exported by the authoring tool
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Generated Rust table
    #[serde(default = "default_rust_output")]
    pub rust_output: PathBuf,

    /// Optional regenerated copy of the header (e.g. for C++ consumers)
    #[serde(default)]
    pub header_output: Option<PathBuf>,

    /// Optional JSON manifest
    #[serde(default)]
    pub json_output: Option<PathBuf>,
}

fn default_input() -> PathBuf {
    PathBuf::from("soundbanks/GeneratedSoundBanks/Wwise_IDs.h")
}

fn default_rust_output() -> PathBuf {
    PathBuf::from("audio-ids/src/generated.rs")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            rust_output: default_rust_output(),
            header_output: None,
            json_output: None,
        }
    }
}

impl Config {
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).context("Invalid ids-gen configuration")
    }

    /// Load `ids-gen.toml` from `root`, falling back to defaults when absent
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE, root.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Failed to load {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            input = "banks/Wwise_IDs.h"
            rust_output = "ids/src/generated.rs"
            header_output = "include/Wwise_IDs.h"
            json_output = "banks/ids.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.input, PathBuf::from("banks/Wwise_IDs.h"));
        assert_eq!(config.rust_output, PathBuf::from("ids/src/generated.rs"));
        assert_eq!(config.header_output, Some(PathBuf::from("include/Wwise_IDs.h")));
        assert_eq!(config.json_output, Some(PathBuf::from("banks/ids.json")));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml("inptu = \"typo.h\"").is_err());
    }
}
