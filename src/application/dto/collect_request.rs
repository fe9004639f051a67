use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::collection::policies::VersionPolicy;

/// Immutable configuration for one collection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectConfig {
    /// Platforms to keep; empty allows all.
    pub include_platform: BTreeSet<String>,
    /// Variant names to keep; empty allows all.
    pub filter_variants: BTreeSet<String>,
    /// How multi-version coordinate groups are resolved.
    pub version_policy: VersionPolicy,
    /// Abort the run on the first unresolvable variant (default) instead of
    /// skipping it.
    pub fail_fast: bool,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            include_platform: BTreeSet::new(),
            filter_variants: BTreeSet::new(),
            version_policy: VersionPolicy::default(),
            fail_fast: true,
        }
    }
}

/// Request DTO for the collection use case.
#[derive(Debug, Clone)]
pub struct CollectRequest {
    pub project_path: PathBuf,
    pub config: CollectConfig,
}

impl CollectRequest {
    pub fn new(project_path: PathBuf, config: CollectConfig) -> Self {
        Self {
            project_path,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_fail_fast_allow_all() {
        let config = CollectConfig::default();
        assert!(config.fail_fast);
        assert!(config.include_platform.is_empty());
        assert!(config.filter_variants.is_empty());
        assert_eq!(config.version_policy, VersionPolicy::Highest);
    }
}
