use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

const DEFAULT_TOML: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub code: CodeConfig,
    pub citations: CitationsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CodeConfig {
    /// Language sent for fences without a tag.
    pub default_language: String,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            default_language: "plain text".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct CitationsConfig {
    pub mode: CitationMode,
}

/// When to strip Gemini citation markers before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CitationMode {
    /// Only when the input contains `[cite_start]`.
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Config {
    /// The defaults embedded at build time from `default_config.toml`.
    pub fn compiled_default() -> Self {
        match toml::from_str(DEFAULT_TOML) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Embedded default config is invalid: {}", e);
                Self::default()
            }
        }
    }

    /// Load config from a TOML file, or return defaults if missing or invalid.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::compiled_default();
        }
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::compiled_default()
            }
        }
    }

    /// Load config from a TOML file, reporting read and parse failures.
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config text. Keys that are absent keep their default values.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn embedded_defaults_match_serde_defaults() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_toml("[code]\ndefault_language = \"rust\"\n").unwrap();
        assert_eq!(config.code.default_language, "rust");
        assert_eq!(config.citations.mode, CitationMode::Auto);
        assert!(config.output.pretty);
    }

    #[test]
    fn citation_modes_parse_lowercase() {
        let config = Config::from_toml("[citations]\nmode = \"never\"\n").unwrap();
        assert_eq!(config.citations.mode, CitationMode::Never);
        let config = Config::from_toml("[citations]\nmode = \"always\"\n").unwrap();
        assert_eq!(config.citations.mode, CitationMode::Always);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Config::from_toml("[citations]\nmode = \"sometimes\"\n").is_err());
    }

    #[test]
    fn load_missing_file_returns_defaults() {
        let path = PathBuf::from("definitely/not/here/md2notion.toml");
        assert_eq!(Config::load(&path), Config::compiled_default());
    }

    #[test]
    fn try_load_missing_file_is_read_error() {
        let path = PathBuf::from("definitely/not/here/md2notion.toml");
        assert!(matches!(Config::try_load(&path), Err(Error::Read { .. })));
    }
}
