/// Match a raw license string against the static registry of SPDX short names.
///
/// Returns the canonical identifier when the string is a known spelling of a
/// registered license. Unrecognized strings return `None` and are preserved
/// verbatim as custom licenses by the normalizer - never dropped.
pub fn match_identifier(raw: &str) -> Option<&'static str> {
    let trimmed = raw.trim();
    // Exact SPDX ids pass through unchanged.
    if let Some(&id) = KNOWN_IDS.iter().find(|&&id| id == trimmed) {
        return Some(id);
    }

    match trimmed {
        "MIT License" | "The MIT License" | "The MIT License (MIT)" => Some("MIT"),
        "Apache 2.0"
        | "Apache-2"
        | "Apache License 2.0"
        | "Apache License, Version 2.0"
        | "The Apache Software License, Version 2.0"
        | "The Apache License, Version 2.0" => Some("Apache-2.0"),
        "BSD" | "BSD License" | "BSD 3-Clause" | "New BSD" | "Modified BSD"
        | "The BSD 3-Clause License" => Some("BSD-3-Clause"),
        "BSD 2-Clause" | "Simplified BSD" => Some("BSD-2-Clause"),
        "ISC License" => Some("ISC"),
        "GNU GPL v2" | "GPL v2" | "GPLv2" | "GNU General Public License v2" => Some("GPL-2.0"),
        "GNU GPL v3" | "GPL v3" | "GPLv3" | "GNU General Public License v3" => Some("GPL-3.0"),
        "GNU LGPL v2.1" | "LGPL v2.1" | "LGPLv2.1" => Some("LGPL-2.1"),
        "GNU LGPL v3" | "LGPL v3" | "LGPLv3" => Some("LGPL-3.0"),
        "Mozilla Public License 2.0"
        | "MPL 2.0"
        | "MPLv2"
        | "Mozilla Public License, Version 2.0" => Some("MPL-2.0"),
        "Eclipse Public License 1.0" | "Eclipse Public License - v 1.0" => Some("EPL-1.0"),
        "Eclipse Public License 2.0" | "Eclipse Public License - v 2.0" => Some("EPL-2.0"),
        "The Unlicense" => Some("Unlicense"),
        "zlib License" | "zlib/libpng License" => Some("Zlib"),
        "CC0" | "CC0 1.0 Universal" => Some("CC0-1.0"),
        _ => None,
    }
}

/// Canonical SPDX short names recognized as-is.
const KNOWN_IDS: &[&str] = &[
    "MIT",
    "MIT-0",
    "Apache-2.0",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "BSD-4-Clause",
    "ISC",
    "0BSD",
    "Unlicense",
    "Zlib",
    "CC0-1.0",
    "CC-BY-3.0",
    "CC-BY-4.0",
    "WTFPL",
    "Artistic-2.0",
    "GPL-2.0",
    "GPL-2.0-only",
    "GPL-2.0-or-later",
    "GPL-3.0",
    "GPL-3.0-only",
    "GPL-3.0-or-later",
    "AGPL-3.0",
    "AGPL-3.0-only",
    "AGPL-3.0-or-later",
    "LGPL-2.1",
    "LGPL-2.1-only",
    "LGPL-2.1-or-later",
    "LGPL-3.0",
    "LGPL-3.0-only",
    "LGPL-3.0-or-later",
    "MPL-2.0",
    "EPL-1.0",
    "EPL-2.0",
    "EUPL-1.2",
    "CDDL-1.0",
    "OSL-3.0",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_exact_spdx_id() {
        assert_eq!(match_identifier("MIT"), Some("MIT"));
        assert_eq!(match_identifier("Apache-2.0"), Some("Apache-2.0"));
    }

    #[test]
    fn test_match_common_spelling() {
        assert_eq!(match_identifier("MIT License"), Some("MIT"));
        assert_eq!(
            match_identifier("The Apache Software License, Version 2.0"),
            Some("Apache-2.0")
        );
        assert_eq!(match_identifier("GPLv3"), Some("GPL-3.0"));
    }

    #[test]
    fn test_match_trims_whitespace() {
        assert_eq!(match_identifier("  MIT License  "), Some("MIT"));
    }

    #[test]
    fn test_unrecognized_returns_none() {
        assert_eq!(match_identifier("Proprietary Example License"), None);
        assert_eq!(match_identifier(""), None);
    }
}
