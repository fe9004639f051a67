use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{self, StreamExt, TryStreamExt};
use serde::Deserialize;

use crate::collection::domain::{RawDescriptor, VariantResolution};
use crate::ports::outbound::DependencySource;
use crate::shared::{CollectError, Result};

/// File name of the per-project dependency manifest exported by the build host.
pub const MANIFEST_FILENAME: &str = "oss-dependencies.toml";

/// Top-level manifest schema: the build host's export of resolved dependency
/// configurations for one project.
#[derive(Debug, Deserialize)]
struct Manifest {
    #[allow(dead_code)]
    name: Option<String>,
    /// Relative directories of sub-projects carrying their own manifests.
    #[serde(default)]
    subprojects: Vec<String>,
    #[serde(default)]
    variants: Vec<ManifestVariant>,
}

#[derive(Debug, Deserialize)]
struct ManifestVariant {
    name: String,
    platform: String,
    /// Coordinate the host failed to resolve for this variant, when set.
    failed: Option<String>,
    #[serde(default)]
    dependencies: Vec<RawDescriptor>,
}

/// ManifestSource adapter reading build-host dependency exports from disk.
///
/// Sub-projects are loaded concurrently through a bounded pool, but the merge
/// happens in declared order, so the adapter output is deterministic
/// regardless of which read finishes first. Children are fully loaded before
/// the parent's variants are folded into the aggregate view.
pub struct ManifestSource {
    parallelism: usize,
}

impl ManifestSource {
    pub fn new() -> Self {
        Self {
            parallelism: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }

    /// Loads the manifest tree rooted at `dir`, children first.
    fn load_project<'a>(&'a self, dir: &'a Path) -> BoxFuture<'a, Result<Vec<VariantResolution>>> {
        async move {
            let manifest = self.read_manifest(dir)?;

            let subproject_dirs: Vec<PathBuf> = manifest
                .subprojects
                .iter()
                .map(|sub| dir.join(sub))
                .collect();

            // `buffered` (not `buffer_unordered`) keeps declared order in the
            // collected output while still overlapping the reads.
            let child_results: Vec<Vec<VariantResolution>> = stream::iter(subproject_dirs)
                .map(|child| async move { self.load_project(&child).await })
                .buffered(self.parallelism)
                .try_collect()
                .await?;

            let mut resolutions: Vec<VariantResolution> =
                child_results.into_iter().flatten().collect();
            resolutions.extend(manifest.variants.into_iter().map(to_resolution));

            Ok(merge_by_variant(resolutions))
        }
        .boxed()
    }

    fn read_manifest(&self, dir: &Path) -> Result<Manifest> {
        let path = dir.join(MANIFEST_FILENAME);
        if !path.exists() {
            return Err(CollectError::ManifestNotFound {
                path,
                suggestion: format!(
                    "Export the dependency manifest from the build host first, or check that '{}' points at a project root",
                    dir.display()
                ),
            }
            .into());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| CollectError::FileReadError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        let manifest: Manifest =
            toml::from_str(&content).map_err(|e| CollectError::ManifestParseError {
                path,
                details: e.to_string(),
            })?;

        Ok(manifest)
    }
}

impl Default for ManifestSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DependencySource for ManifestSource {
    async fn collect(&self, project_path: &Path) -> Result<Vec<VariantResolution>> {
        self.load_project(project_path).await
    }
}

fn to_resolution(variant: ManifestVariant) -> VariantResolution {
    match variant.failed {
        Some(coordinate) => {
            VariantResolution::failed(&variant.name, &variant.platform, &coordinate)
        }
        None => VariantResolution::resolved(&variant.name, &variant.platform, variant.dependencies),
    }
}

/// Folds resolutions sharing a (variant, platform) pair, which happens when
/// several sub-projects contribute to the same variant. Descriptor lists are
/// concatenated; a resolution failure on either side taints the merged
/// variant, first failure wins.
fn merge_by_variant(resolutions: Vec<VariantResolution>) -> Vec<VariantResolution> {
    let mut merged: BTreeMap<(String, String), VariantResolution> = BTreeMap::new();

    for resolution in resolutions {
        let key = (resolution.variant.clone(), resolution.platform.clone());
        match merged.get_mut(&key) {
            None => {
                merged.insert(key, resolution);
            }
            Some(existing) => match (&mut existing.outcome, resolution.outcome) {
                (Ok(descriptors), Ok(incoming)) => descriptors.extend(incoming),
                (Ok(_), Err(failure)) => existing.outcome = Err(failure),
                (Err(_), _) => {}
            },
        }
    }

    merged.into_values().collect()
}
