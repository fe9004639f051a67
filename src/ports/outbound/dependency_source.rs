use crate::collection::domain::VariantResolution;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// DependencySource port for querying the host build system.
///
/// Given a project handle, produces one resolution result per eligible
/// variant: the direct + transitive dependency descriptors reachable from
/// that variant's resolved configuration, with whatever locally available
/// metadata the host exposes. Partial or absent descriptor fields are a valid
/// state, not an error.
///
/// Sub-projects must be evaluated recursively, children before the parent's
/// aggregate view. Implementations are read-only against build state and may
/// resolve independent variants or sub-projects in parallel.
///
/// # Async Support
/// Resolution is async so implementations can overlap independent variant
/// reads. Implementations must be `Send + Sync`.
#[async_trait]
pub trait DependencySource: Send + Sync {
    /// Resolves the dependency set of the project rooted at `project_path`.
    ///
    /// # Returns
    /// One `VariantResolution` per variant. A variant whose configuration
    /// could not be resolved carries an `Err` outcome naming the offending
    /// coordinate; deciding between abort and skip is the caller's job.
    ///
    /// # Errors
    /// Returns an error only for failures outside any single variant, such as
    /// an unreadable or malformed project manifest.
    async fn collect(&self, project_path: &Path) -> Result<Vec<VariantResolution>>;
}
