/// Policies - License identifier matching and version ordering rules
pub mod spdx;
pub mod version;

pub use version::{compare_versions, VersionOrdering, VersionPolicy};
