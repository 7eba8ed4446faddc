// src/config.rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dictionary;
use crate::error::{G2pError, Result};
use crate::normalize::GERMAN;

// ============================================================================
// Frontend configuration
// ============================================================================

/// Frontend configuration, stored as JSON
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Language code; only `"de"` is supported
    pub language: String,
    /// Pad the output with `_` boundary symbols
    pub pad_boundaries: bool,
    /// HuggingFace `tokenizer.json`; the basic tokenizer is used when unset
    pub tokenizer_path: Option<PathBuf>,
    /// Pronunciation dictionary
    pub dictionary_path: Option<PathBuf>,
    /// Binary dictionary cache; defaults to the platform cache directory
    pub cache_path: Option<PathBuf>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            language: GERMAN.to_string(),
            pad_boundaries: true,
            tokenizer_path: None,
            dictionary_path: None,
            cache_path: None,
        }
    }
}

impl FrontendConfig {
    /// Loads a configuration file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            G2pError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: FrontendConfig = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.language != GERMAN {
            return Err(G2pError::UnsupportedLanguage(self.language.clone()));
        }
        if self.cache_path.is_some() && self.dictionary_path.is_none() {
            tracing::warn!("cache_path is set but dictionary_path is not; the cache is unused");
        }
        Ok(())
    }

    /// Configured cache path, or the platform default
    pub fn resolved_cache_path(&self) -> Result<PathBuf> {
        match &self.cache_path {
            Some(path) => Ok(path.clone()),
            None => dictionary::default_cache_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FrontendConfig::default();
        assert_eq!(config.language, "de");
        assert!(config.pad_boundaries);
        assert!(config.dictionary_path.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FrontendConfig = serde_json::from_str(r#"{"pad_boundaries": false}"#).unwrap();
        assert!(!config.pad_boundaries);
        assert_eq!(config.language, "de");
    }

    #[test]
    fn test_save_and_load() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("frontend.json");
        let config = FrontendConfig {
            dictionary_path: Some(PathBuf::from("germandict.rep")),
            cache_path: Some(temp.path().join("cache.bin")),
            ..Default::default()
        };

        config.save_to_path(&path).expect("save config");
        let loaded = FrontendConfig::load_from_path(&path).expect("load config");
        assert_eq!(loaded, config);
        assert_eq!(loaded.resolved_cache_path().unwrap(), temp.path().join("cache.bin"));
    }

    #[test]
    fn test_rejects_other_language() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("frontend.json");
        std::fs::write(&path, r#"{"language": "en"}"#).expect("write config");

        let err = FrontendConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, G2pError::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_invalid_json() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("frontend.json");
        std::fs::write(&path, "not json").expect("write config");

        let err = FrontendConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, G2pError::Serialization(_)));
    }
}
