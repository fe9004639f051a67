use crate::collection::domain::CollectedContainer;
use crate::shared::Result;
use std::path::PathBuf;

/// CacheStore port for persisting and reloading the collected container.
///
/// `write` must be deterministic and idempotent: serializing the same logical
/// container twice yields byte-identical output, which is what lets external
/// callers fingerprint the artifact for incremental builds. A failed write
/// must never leave a corrupt or truncated cache behind.
pub trait CacheStore {
    /// Serializes the container and returns the location it was written to.
    fn write(&self, container: &CollectedContainer) -> Result<PathBuf>;

    /// Reloads the last written container.
    ///
    /// # Errors
    /// Returns `CollectError::CacheMiss` when no cache exists at the store's
    /// location, and `CollectError::Serialization` when an existing cache
    /// cannot be parsed.
    fn read(&self) -> Result<CollectedContainer>;
}
