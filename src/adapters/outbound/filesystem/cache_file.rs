use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::collection::domain::CollectedContainer;
use crate::ports::outbound::CacheStore;
use crate::shared::{CollectError, Result};

/// JsonCacheFile adapter persisting the collected container as JSON.
///
/// Writes go to a temp file in the target directory and are renamed into
/// place, so a failed run can never truncate or corrupt a previously valid
/// cache. Serialization is deterministic (struct field order plus sorted
/// collections), making `write` idempotent byte-for-byte.
#[derive(Debug)]
pub struct JsonCacheFile {
    path: PathBuf,
}

impl JsonCacheFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Serializes a container to its canonical cache representation.
    pub fn to_json(&self, container: &CollectedContainer) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(container).map_err(|e| CollectError::Serialization {
                path: self.path.clone(),
                details: e.to_string(),
            })?;
        json.push('\n');
        Ok(json)
    }
}

impl CacheStore for JsonCacheFile {
    fn write(&self, container: &CollectedContainer) -> Result<PathBuf> {
        let json = self.to_json(container)?;

        let parent = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(|parent| parent.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        fs::create_dir_all(&parent).map_err(|e| CollectError::FileWriteError {
            path: self.path.clone(),
            details: format!("Failed to create cache directory: {}", e),
        })?;

        // Temp file lives in the same directory so the rename is atomic.
        let mut temp = NamedTempFile::new_in(&parent).map_err(|e| CollectError::FileWriteError {
            path: self.path.clone(),
            details: format!("Failed to create temporary file: {}", e),
        })?;

        temp.write_all(json.as_bytes())
            .map_err(|e| CollectError::FileWriteError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        temp.persist(&self.path)
            .map_err(|e| CollectError::FileWriteError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        Ok(self.path.clone())
    }

    fn read(&self) -> Result<CollectedContainer> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                CollectError::CacheMiss {
                    path: self.path.clone(),
                }
            } else {
                CollectError::FileReadError {
                    path: self.path.clone(),
                    details: e.to_string(),
                }
            }
        })?;

        let container: CollectedContainer =
            serde_json::from_str(&content).map_err(|e| CollectError::Serialization {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        Ok(container)
    }
}
