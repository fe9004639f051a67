use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Canonical record for one resolved dependency.
///
/// Field semantics follow the POM-equivalent descriptor the build host exposes:
/// `unique_id` is the artifact coordinate without version and is never blank,
/// `artifact_version` may be absent after a version-agnostic merge. License and
/// funding sets are ordered so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    pub unique_id: String,
    pub artifact_version: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub developers: Vec<Developer>,
    pub organization: Option<Organization>,
    pub scm: Option<Scm>,
    #[serde(default)]
    pub licenses: BTreeSet<License>,
    #[serde(default)]
    pub funding: BTreeSet<Funding>,
    pub tag: Option<String>,
}

impl Library {
    /// The `unique_id`:`artifact_version` pair combined.
    pub fn artifact_id(&self) -> String {
        format!(
            "{}:{}",
            self.unique_id,
            self.artifact_version.as_deref().unwrap_or("")
        )
    }

    /// Returns `true` when this artifact is assumed to be open source,
    /// i.e. a non-blank scm url is provided.
    ///
    /// Always recomputed from `scm` rather than stored, so it can never go
    /// stale relative to the scm field.
    pub fn open_source(&self) -> bool {
        self.scm
            .as_ref()
            .and_then(|scm| scm.url.as_deref())
            .is_some_and(|url| !url.trim().is_empty())
    }
}

/// A developer listed in the artifact descriptor. Order is preserved from the
/// source descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Developer {
    pub name: Option<String>,
    pub url: Option<String>,
}

/// The organization credited with creating the dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub url: Option<String>,
}

/// Source-control metadata linking to the repository hosting the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scm {
    pub url: Option<String>,
}

/// An identified license. `id` holds the registry (SPDX-like) short name when
/// the source string was recognized; custom licenses keep `id = None` and the
/// verbatim name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub id: Option<String>,
    pub name: String,
    pub url: Option<String>,
    pub license_content: Option<String>,
}

impl License {
    /// The identity licenses are deduplicated under: the registry id when
    /// matched, the verbatim name otherwise.
    pub fn identifier(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

/// A funding opportunity for the artifact, unique by platform + url.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Funding {
    pub platform: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(scm: Option<Scm>) -> Library {
        Library {
            unique_id: "com.example:lib".to_string(),
            artifact_version: Some("1.2.0".to_string()),
            name: "Example Lib".to_string(),
            description: None,
            website: None,
            developers: vec![],
            organization: None,
            scm,
            licenses: BTreeSet::new(),
            funding: BTreeSet::new(),
            tag: None,
        }
    }

    #[test]
    fn test_artifact_id_with_version() {
        let lib = library(None);
        assert_eq!(lib.artifact_id(), "com.example:lib:1.2.0");
    }

    #[test]
    fn test_artifact_id_without_version() {
        let mut lib = library(None);
        lib.artifact_version = None;
        assert_eq!(lib.artifact_id(), "com.example:lib:");
    }

    #[test]
    fn test_open_source_with_scm_url() {
        let lib = library(Some(Scm {
            url: Some("https://github.com/x/y".to_string()),
        }));
        assert!(lib.open_source());
    }

    #[test]
    fn test_open_source_without_scm() {
        let lib = library(None);
        assert!(!lib.open_source());
    }

    #[test]
    fn test_open_source_blank_scm_url() {
        let lib = library(Some(Scm {
            url: Some("   ".to_string()),
        }));
        assert!(!lib.open_source());
    }

    #[test]
    fn test_license_identifier_prefers_id() {
        let license = License {
            id: Some("MIT".to_string()),
            name: "MIT License".to_string(),
            url: None,
            license_content: None,
        };
        assert_eq!(license.identifier(), "MIT");
    }

    #[test]
    fn test_license_identifier_falls_back_to_name() {
        let license = License {
            id: None,
            name: "Proprietary Example License".to_string(),
            url: None,
            license_content: None,
        };
        assert_eq!(license.identifier(), "Proprietary Example License");
    }

    #[test]
    fn test_library_serializes_camel_case() {
        let lib = library(None);
        let json = serde_json::to_value(&lib).unwrap();
        assert!(json.get("uniqueId").is_some());
        assert!(json.get("artifactVersion").is_some());
        assert!(json.get("unique_id").is_none());
    }

    #[test]
    fn test_license_content_key_is_camel_case() {
        let license = License {
            id: Some("MIT".to_string()),
            name: "MIT License".to_string(),
            url: None,
            license_content: Some("MIT License text".to_string()),
        };
        let json = serde_json::to_value(&license).unwrap();
        assert!(json.get("licenseContent").is_some());
    }
}
