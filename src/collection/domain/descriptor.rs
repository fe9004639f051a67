use serde::Deserialize;

use super::{Developer, Funding, Organization, Scm};

/// One raw dependency descriptor as exported by the build host.
///
/// Everything beyond the coordinate is optional: a descriptor with nothing but
/// group + artifact is a valid state, not an error. Normalization fills the
/// gaps and derives the canonical `Library`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDescriptor {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub artifact: String,
    pub version: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub licenses: Vec<RawLicense>,
    #[serde(default)]
    pub developers: Vec<Developer>,
    pub organization: Option<Organization>,
    pub scm: Option<Scm>,
    #[serde(default)]
    pub funding: Vec<Funding>,
    pub tag: Option<String>,
}

/// A license entry as it appears in the descriptor, before registry matching.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawLicense {
    pub name: Option<String>,
    pub url: Option<String>,
    pub content: Option<String>,
}

/// Why a variant's dependency configuration could not be resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionFailure {
    pub coordinate: String,
    pub variant: String,
}

/// The outcome of resolving one variant's dependency configuration.
///
/// The source adapter surfaces per-variant failures instead of deciding their
/// fate; the caller chooses fail-fast (abort the run) or best-effort (skip the
/// variant and continue).
#[derive(Debug, Clone)]
pub struct VariantResolution {
    pub variant: String,
    pub platform: String,
    pub outcome: Result<Vec<RawDescriptor>, ResolutionFailure>,
}

impl VariantResolution {
    pub fn resolved(variant: &str, platform: &str, descriptors: Vec<RawDescriptor>) -> Self {
        Self {
            variant: variant.to_string(),
            platform: platform.to_string(),
            outcome: Ok(descriptors),
        }
    }

    pub fn failed(variant: &str, platform: &str, coordinate: &str) -> Self {
        Self {
            variant: variant.to_string(),
            platform: platform.to_string(),
            outcome: Err(ResolutionFailure {
                coordinate: coordinate.to_string(),
                variant: variant.to_string(),
            }),
        }
    }
}
