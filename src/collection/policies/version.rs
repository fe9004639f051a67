use std::cmp::Ordering;

/// How the aggregator resolves a coordinate group carrying multiple distinct
/// versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionPolicy {
    /// Keep only the highest version and discard the rest.
    #[default]
    Highest,
    /// Retain one library per distinct version.
    KeepAll,
}

impl std::str::FromStr for VersionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "highest" => Ok(VersionPolicy::Highest),
            "keep-all" | "keepall" => Ok(VersionPolicy::KeepAll),
            _ => Err(format!(
                "Invalid version policy: {}. Please specify 'highest' or 'keep-all'",
                s
            )),
        }
    }
}

/// The outcome of comparing two artifact version strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionOrdering {
    pub ordering: Ordering,
    /// Set when the semantic-version comparison could not be applied and the
    /// ordering fell back to plain string comparison. The aggregator reports
    /// this as a non-fatal `AmbiguousVersionConflict` diagnostic.
    pub ambiguous: bool,
}

/// Compare two version strings, semantic-version first, string order as the
/// fallback when either side fails to parse.
pub fn compare_versions(a: &str, b: &str) -> VersionOrdering {
    let parsed_a = parse_lenient(a);
    let parsed_b = parse_lenient(b);

    match (parsed_a, parsed_b) {
        (Some(a), Some(b)) => VersionOrdering {
            ordering: a.cmp(&b),
            ambiguous: false,
        },
        _ => VersionOrdering {
            ordering: a.cmp(b),
            ambiguous: true,
        },
    }
}

/// Parses a version string as semver, tolerating a leading `v` prefix.
fn parse_lenient(version: &str) -> Option<semver::Version> {
    let trimmed = version.trim();
    let stripped = trimmed.strip_prefix('v').unwrap_or(trimmed);
    semver::Version::parse(stripped).ok()
}
