//! Pronunciation dictionary and its binary cache
//!
//! Dictionary format, one entry per line:
//!
//! ```text
//! WORD<two or more spaces, or tabs>p r o - n u n
//! ```
//!
//! Syllables are separated by ` - `, phones by whitespace, `?` is dropped.
//! Lines that do not split into exactly two fields are collected as
//! [`MalformedLine`]s; loading continues.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{G2pError, Result};

/// Uppercased word → syllables → phones
pub type PronunciationMap = HashMap<String, Vec<Vec<String>>>;

pub const CACHE_FILENAME: &str = "germandict_cache.bin";

lazy_static::lazy_static! {
    static ref FIELD_SEPARATOR: Regex =
        Regex::new(r"\s{2,}|\t+").expect("separator pattern is valid");
}

/// A skipped dictionary line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalformedLine {
    /// 1-based
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}

/// Result of parsing a dictionary
#[derive(Debug, Clone, Default)]
pub struct DictionaryLoad {
    pub entries: PronunciationMap,
    pub skipped: Vec<MalformedLine>,
}

/// Parses dictionary text. Blank lines are ignored.
pub fn parse_dictionary(content: &str) -> DictionaryLoad {
    let mut load = DictionaryLoad::default();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = FIELD_SEPARATOR.split(line).collect();
        if fields.len() != 2 {
            load.skipped.push(MalformedLine {
                line_number: index + 1,
                line: line.to_string(),
                reason: format!("expected 2 fields, found {}", fields.len()),
            });
            continue;
        }

        let word = fields[0].trim().to_uppercase();
        let transcription = fields[1].trim().replace('?', "");
        let syllables = transcription
            .split(" - ")
            .map(|syllable| syllable.split_whitespace().map(str::to_string).collect())
            .collect();

        load.entries.insert(word, syllables);
    }

    load
}

/// Reads and parses a dictionary file
pub fn read_dictionary(path: &Path) -> Result<DictionaryLoad> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        G2pError::Dictionary(format!("failed to read {}: {}", path.display(), e))
    })?;

    let load = parse_dictionary(&content);
    if !load.skipped.is_empty() {
        tracing::warn!(
            "skipped {} malformed line(s) in {}",
            load.skipped.len(),
            path.display()
        );
    }
    tracing::info!(
        "loaded {} pronunciation(s) from {}",
        load.entries.len(),
        path.display()
    );
    Ok(load)
}

// ============================================================================
// Cache
// ============================================================================

/// Default cache location under the platform cache directory
pub fn default_cache_path() -> Result<PathBuf> {
    let cache_dir = dirs::cache_dir()
        .ok_or_else(|| G2pError::Cache("cannot determine cache directory".to_string()))?;
    let app_dir = cache_dir.join("german-g2p");
    std::fs::create_dir_all(&app_dir)?;
    Ok(app_dir.join(CACHE_FILENAME))
}

/// Loads the pronunciation map from `cache_path`, or parses `dictionary_path`
/// and writes the cache.
///
/// Skipped lines are only reported when the dictionary is actually parsed;
/// a cache hit returns none. A cache that fails to decode is deleted and
/// rebuilt.
pub fn load_or_build(dictionary_path: &Path, cache_path: &Path) -> Result<DictionaryLoad> {
    if cache_path.exists() {
        match read_cache(cache_path) {
            Ok(entries) => {
                tracing::info!(
                    "dictionary cache hit: {} ({} entries)",
                    cache_path.display(),
                    entries.len()
                );
                return Ok(DictionaryLoad {
                    entries,
                    skipped: Vec::new(),
                });
            }
            Err(err) => {
                tracing::warn!("dictionary cache unreadable, rebuilding: {}", err);
                if let Err(err) = std::fs::remove_file(cache_path) {
                    tracing::warn!("failed to remove broken cache: {}", err);
                }
            }
        }
    }

    let load = read_dictionary(dictionary_path)?;
    write_cache(cache_path, &load.entries)?;
    tracing::info!("dictionary cache written: {}", cache_path.display());
    Ok(load)
}

pub fn read_cache(path: &Path) -> Result<PronunciationMap> {
    let bytes = std::fs::read(path)?;
    bincode::deserialize(&bytes)
        .map_err(|e| G2pError::Cache(format!("failed to decode {}: {}", path.display(), e)))
}

/// Writes the cache through a temp file and a rename, so readers never see a
/// partial file. Concurrent writers race benignly: the content is identical.
pub fn write_cache(path: &Path, entries: &PronunciationMap) -> Result<()> {
    let bytes = bincode::serialize(entries)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let unique_suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = path.with_extension(format!("tmp.{}", unique_suffix));

    {
        let mut tmp_file = std::fs::File::create(&tmp_path)?;
        use std::io::Write;
        tmp_file.write_all(&bytes)?;
        tmp_file.sync_all()?;
    }

    if let Err(err) = std::fs::rename(&tmp_path, path) {
        if let Err(cleanup_err) = std::fs::remove_file(&tmp_path) {
            tracing::warn!("failed to clean up temp cache file: {}", cleanup_err);
        }
        return Err(G2pError::Cache(format!(
            "failed to replace {}: {}",
            path.display(),
            err
        )));
    }

    Ok(())
}
