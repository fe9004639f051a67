use std::collections::{BTreeMap, BTreeSet};

use crate::collection::domain::{Coordinate, Library, License, RawDescriptor, Scm};
use crate::collection::policies::spdx;
use crate::shared::CollectError;

/// Converts one raw descriptor into the canonical `Library`.
///
/// Pure function of its input: same descriptor always yields a structurally
/// equal library. The only failure mode is a coordinate too incomplete to
/// derive a stable identifier from.
///
/// # Errors
/// Returns `CollectError::MalformedCoordinate` when group or artifact is blank.
pub fn normalize(descriptor: &RawDescriptor) -> Result<Library, CollectError> {
    let coordinate = Coordinate::new(&descriptor.group, &descriptor.artifact)?;
    let unique_id = coordinate.into_string();

    // A missing display name falls back to the artifact identifier, never blank.
    let name = descriptor
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| unique_id.clone());

    Ok(Library {
        artifact_version: non_blank(descriptor.version.as_deref()),
        name,
        description: non_blank(descriptor.description.as_deref()),
        website: non_blank(descriptor.website.as_deref()),
        developers: descriptor
            .developers
            .iter()
            .filter(|dev| dev.name.is_some() || dev.url.is_some())
            .cloned()
            .collect(),
        organization: descriptor.organization.clone(),
        scm: normalize_scm(descriptor.scm.as_ref()),
        licenses: normalize_licenses(descriptor),
        funding: descriptor
            .funding
            .iter()
            .filter(|funding| !funding.url.trim().is_empty())
            .cloned()
            .collect(),
        tag: non_blank(descriptor.tag.as_deref()),
        unique_id,
    })
}

/// Matches each license string against the identifier registry and
/// deduplicates by identifier. Unrecognized strings become custom licenses
/// with the verbatim name preserved.
fn normalize_licenses(descriptor: &RawDescriptor) -> BTreeSet<License> {
    let mut by_identifier: BTreeMap<String, License> = BTreeMap::new();

    for raw in &descriptor.licenses {
        let Some(name) = raw.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) else {
            continue;
        };

        let license = License {
            id: spdx::match_identifier(name).map(str::to_string),
            name: name.to_string(),
            url: non_blank(raw.url.as_deref()),
            license_content: raw.content.clone(),
        };

        // First entry per identifier wins; later duplicates from the same
        // descriptor are dropped.
        by_identifier
            .entry(license.identifier().to_string())
            .or_insert(license);
    }

    by_identifier.into_values().collect()
}

/// An scm entry without a usable url carries no information, so it is dropped
/// and `open_source` derives cleanly from scm presence.
fn normalize_scm(scm: Option<&Scm>) -> Option<Scm> {
    let url = non_blank(scm?.url.as_deref())?;
    Some(Scm { url: Some(url) })
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
