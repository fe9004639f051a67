use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::collection::domain::{CollectedContainer, Library, License};
use crate::collection::policies::{compare_versions, version::VersionPolicy};

/// The normalized library list contributed by one variant.
#[derive(Debug, Clone)]
pub struct NormalizedVariant {
    pub variant: String,
    pub platform: String,
    pub libraries: Vec<Library>,
}

/// Non-fatal findings surfaced during aggregation. Reported through the
/// injected progress reporter; they never abort the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    AmbiguousVersionConflict {
        unique_id: String,
        versions: Vec<String>,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::AmbiguousVersionConflict {
                unique_id,
                versions,
            } => write!(
                f,
                "Ambiguous version conflict for '{}': versions [{}] are not comparable, keeping first-seen order",
                unique_id,
                versions.join(", ")
            ),
        }
    }
}

/// The aggregated container plus any non-fatal diagnostics.
#[derive(Debug, Clone)]
pub struct AggregationOutcome {
    pub container: CollectedContainer,
    pub diagnostics: Vec<Diagnostic>,
}

/// Merges per-variant library lists into one deduplicated container.
///
/// The traversal is deterministic from end to end: variants are visited in
/// alphabetical order, groups in coordinate order, and the result is sorted by
/// (`unique_id`, `artifact_version`). Repeated runs over unchanged inputs
/// therefore serialize byte-identically, which the cache contract depends on.
#[derive(Debug)]
pub struct Aggregator {
    include_platform: BTreeSet<String>,
    filter_variants: BTreeSet<String>,
    version_policy: VersionPolicy,
}

impl Aggregator {
    /// # Arguments
    /// * `include_platform` - platforms to keep; empty allows all
    /// * `filter_variants` - variant names to keep; empty allows all
    /// * `version_policy` - how to resolve multi-version coordinate groups
    pub fn new(
        include_platform: BTreeSet<String>,
        filter_variants: BTreeSet<String>,
        version_policy: VersionPolicy,
    ) -> Self {
        Self {
            include_platform,
            filter_variants,
            version_policy,
        }
    }

    pub fn aggregate(&self, mut variants: Vec<NormalizedVariant>) -> AggregationOutcome {
        variants.retain(|variant| {
            (self.include_platform.is_empty() || self.include_platform.contains(&variant.platform))
                && (self.filter_variants.is_empty()
                    || self.filter_variants.contains(&variant.variant))
        });

        // Alphabetical variant order is the stable traversal that decides which
        // value wins for singular fields.
        variants.sort_by(|a, b| a.variant.cmp(&b.variant));

        let variant_names: BTreeSet<String> =
            variants.iter().map(|v| v.variant.clone()).collect();
        let platforms: BTreeSet<String> = variants.iter().map(|v| v.platform.clone()).collect();

        let mut groups: BTreeMap<String, Vec<Library>> = BTreeMap::new();
        for variant in variants {
            for library in variant.libraries {
                groups.entry(library.unique_id.clone()).or_default().push(library);
            }
        }

        let mut diagnostics = Vec::new();
        let mut libraries = Vec::new();
        for (unique_id, entries) in groups {
            libraries.extend(self.collapse_group(&unique_id, entries, &mut diagnostics));
        }

        libraries.sort_by(|a, b| {
            a.unique_id
                .cmp(&b.unique_id)
                .then_with(|| a.artifact_version.cmp(&b.artifact_version))
        });

        AggregationOutcome {
            container: CollectedContainer {
                libraries,
                variants: variant_names.into_iter().collect(),
                platforms: platforms.into_iter().collect(),
            },
            diagnostics,
        }
    }

    /// Collapses all entries sharing one `unique_id` into one library per
    /// surviving version, then applies the version-conflict policy.
    fn collapse_group(
        &self,
        unique_id: &str,
        entries: Vec<Library>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<Library> {
        // Group by version preserving first-seen order of versions.
        let mut versions: Vec<(Option<String>, Vec<Library>)> = Vec::new();
        for entry in entries {
            match versions
                .iter()
                .position(|(version, _)| *version == entry.artifact_version)
            {
                Some(idx) => versions[idx].1.push(entry),
                None => versions.push((entry.artifact_version.clone(), vec![entry])),
            }
        }

        let mut merged: Vec<Library> = versions
            .into_iter()
            .map(|(_, group)| merge_entries(group))
            .collect();

        if merged.len() <= 1 {
            return merged;
        }

        match self.version_policy {
            VersionPolicy::KeepAll => merged,
            VersionPolicy::Highest => {
                let mut ambiguous = false;
                let mut highest = 0;
                for candidate in 1..merged.len() {
                    let result = compare_versions(
                        merged[highest].artifact_version.as_deref().unwrap_or(""),
                        merged[candidate].artifact_version.as_deref().unwrap_or(""),
                    );
                    ambiguous |= result.ambiguous;
                    if result.ordering == std::cmp::Ordering::Less {
                        highest = candidate;
                    }
                }

                if ambiguous {
                    diagnostics.push(Diagnostic::AmbiguousVersionConflict {
                        unique_id: unique_id.to_string(),
                        versions: merged
                            .iter()
                            .map(|lib| {
                                lib.artifact_version.clone().unwrap_or_default()
                            })
                            .collect(),
                    });
                    // No reliable ordering: fall back to the first-seen entry.
                    highest = 0;
                }

                vec![merged.swap_remove(highest)]
            }
        }
    }
}

/// Merges entries that share `unique_id` and `artifact_version` into one
/// library. Set fields are unioned, developers concatenated and deduplicated
/// preserving first-seen order, and singular fields take the first non-empty
/// value in traversal order.
fn merge_entries(entries: Vec<Library>) -> Library {
    let mut iter = entries.into_iter();
    let mut merged = iter
        .next()
        .expect("a version group always holds at least one entry");

    let mut licenses: BTreeMap<String, License> = merged
        .licenses
        .iter()
        .map(|license| (license.identifier().to_string(), license.clone()))
        .collect();
    let mut seen_developers: BTreeSet<(Option<String>, Option<String>)> = merged
        .developers
        .iter()
        .map(|dev| (dev.name.clone(), dev.url.clone()))
        .collect();

    for entry in iter {
        for license in entry.licenses {
            licenses
                .entry(license.identifier().to_string())
                .or_insert(license);
        }
        merged.funding.extend(entry.funding);
        for developer in entry.developers {
            let identity = (developer.name.clone(), developer.url.clone());
            if seen_developers.insert(identity) {
                merged.developers.push(developer);
            }
        }

        // A name equal to the coordinate is the normalizer's fallback; an
        // explicit display name from another variant is more complete.
        if merged.name == merged.unique_id && entry.name != merged.unique_id {
            merged.name = entry.name;
        }
        if merged.description.is_none() {
            merged.description = entry.description;
        }
        if merged.website.is_none() {
            merged.website = entry.website;
        }
        if merged.organization.is_none() {
            merged.organization = entry.organization;
        }
        if merged.scm.is_none() {
            merged.scm = entry.scm;
        }
        if merged.tag.is_none() {
            merged.tag = entry.tag;
        }
    }

    merged.licenses = licenses.into_values().collect();
    merged
}
