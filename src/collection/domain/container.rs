use serde::{Deserialize, Serialize};

use super::Library;

/// The aggregate result of one collection run.
///
/// `libraries` is sorted by (`unique_id`, `artifact_version`) and contains no
/// two entries sharing both, which is what makes repeated runs over unchanged
/// inputs serialize to byte-identical output. `variants` and `platforms` record
/// which build configurations contributed entries after filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedContainer {
    pub libraries: Vec<Library>,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
}

impl CollectedContainer {
    pub fn empty() -> Self {
        Self {
            libraries: Vec::new(),
            variants: Vec::new(),
            platforms: Vec::new(),
        }
    }

    /// Looks up a library by its version-stripped coordinate.
    pub fn find(&self, unique_id: &str) -> Option<&Library> {
        self.libraries.iter().find(|lib| lib.unique_id == unique_id)
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn library(unique_id: &str) -> Library {
        Library {
            unique_id: unique_id.to_string(),
            artifact_version: Some("1.0.0".to_string()),
            name: unique_id.to_string(),
            description: None,
            website: None,
            developers: vec![],
            organization: None,
            scm: None,
            licenses: BTreeSet::new(),
            funding: BTreeSet::new(),
            tag: None,
        }
    }

    #[test]
    fn test_empty_container() {
        let container = CollectedContainer::empty();
        assert!(container.is_empty());
        assert_eq!(container.len(), 0);
    }

    #[test]
    fn test_find_by_unique_id() {
        let container = CollectedContainer {
            libraries: vec![library("com.example:a"), library("com.example:b")],
            variants: vec!["jvmMain".to_string()],
            platforms: vec!["jvm".to_string()],
        };
        assert!(container.find("com.example:b").is_some());
        assert!(container.find("com.example:missing").is_none());
    }

    #[test]
    fn test_container_round_trips_through_json() {
        let container = CollectedContainer {
            libraries: vec![library("com.example:a")],
            variants: vec!["jvmMain".to_string()],
            platforms: vec!["jvm".to_string()],
        };
        let json = serde_json::to_string(&container).unwrap();
        let parsed: CollectedContainer = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, container);
    }
}
