//! File-system persistence for mapping results.
//!
//! Each mapping result is stored as one JSON file under a base directory,
//! named by the normalized mapping name, so a mapping worked out once can
//! be reloaded and applied to later files with the same layout.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use triplify_model::{ColumnKey, MappingResult};

use crate::error::{MapError, Result};

/// A mapping result plus storage metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMapping {
    /// The mapping result itself, flattened into the stored document.
    #[serde(flatten)]
    pub result: MappingResult,
    /// RFC 3339 timestamp of when the mapping was saved.
    pub saved_at: String,
    /// Optional free-form notes about this mapping.
    pub description: Option<String>,
    /// Version of the storage format.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl StoredMapping {
    pub fn new(result: MappingResult) -> Self {
        Self {
            result,
            saved_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            description: None,
            version: default_version(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Metadata about one stored mapping, for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingMetadata {
    /// Normalized name the mapping is stored under.
    pub name: String,
    /// Template the stored result was produced with.
    pub template_used: String,
    /// File the mapping lives in.
    pub file_path: PathBuf,
    /// Number of mapped columns in the stored result.
    pub mapped_count: usize,
    /// RFC 3339 timestamp of when the mapping was saved.
    pub saved_at: String,
}

/// Directory-backed store of mapping results.
#[derive(Debug, Clone)]
pub struct MappingRepository {
    base_dir: PathBuf,
}

impl MappingRepository {
    /// Open a repository at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).map_err(|source| MapError::io(&base_dir, source))?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Save a result under `name`, stamping it with the current time.
    pub fn save(&self, name: &str, result: &MappingResult) -> Result<PathBuf> {
        self.save_stored(name, &StoredMapping::new(result.clone()))
    }

    /// Save a stored mapping (with caller-supplied metadata) under `name`.
    pub fn save_stored(&self, name: &str, stored: &StoredMapping) -> Result<PathBuf> {
        let path = self.mapping_path(name);
        let json = serde_json::to_string_pretty(stored)
            .map_err(|source| MapError::json(&path, source))?;
        fs::write(&path, json).map_err(|source| MapError::io(&path, source))?;
        tracing::debug!(path = %path.display(), "Saved mapping");
        Ok(path)
    }

    /// Load the mapping stored under `name`, or `None` if there is none.
    pub fn load(&self, name: &str) -> Result<Option<StoredMapping>> {
        let path = self.mapping_path(name);
        if !path.exists() {
            return Ok(None);
        }
        let contents =
            fs::read_to_string(&path).map_err(|source| MapError::io(&path, source))?;
        let stored: StoredMapping =
            serde_json::from_str(&contents).map_err(|source| MapError::json(&path, source))?;
        Ok(Some(stored))
    }

    /// List stored mappings, sorted by name. Files that are not valid
    /// stored mappings are skipped.
    pub fn list(&self) -> Result<Vec<MappingMetadata>> {
        let mut entries = Vec::new();
        let dir =
            fs::read_dir(&self.base_dir).map_err(|source| MapError::io(&self.base_dir, source))?;
        for entry in dir {
            let entry = entry.map_err(|source| MapError::io(&self.base_dir, source))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let filename = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default();
            if !filename.ends_with(".json") {
                continue;
            }
            let Ok(contents) = fs::read_to_string(&path) else {
                continue;
            };
            if let Ok(stored) = serde_json::from_str::<StoredMapping>(&contents) {
                entries.push(MappingMetadata {
                    name: filename.trim_end_matches(".json").to_string(),
                    template_used: stored.result.template_used.clone(),
                    file_path: path,
                    mapped_count: stored.result.mapping.len(),
                    saved_at: stored.saved_at.clone(),
                });
            }
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Delete the mapping stored under `name`; false if nothing was there.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let path = self.mapping_path(name);
        if path.exists() {
            fs::remove_file(&path).map_err(|source| MapError::io(&path, source))?;
            tracing::debug!(path = %path.display(), "Deleted mapping");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.mapping_path(name).exists()
    }

    /// Storage path for a mapping name, reusing header normalization so
    /// names are safe as filenames.
    fn mapping_path(&self, name: &str) -> PathBuf {
        let key = ColumnKey::normalize(name);
        let stem = if key.is_empty() { "mapping" } else { key.as_str() };
        self.base_dir.join(format!("{stem}.json"))
    }
}
