pub mod cache_file;
pub mod manifest_source;

pub use cache_file::JsonCacheFile;
pub use manifest_source::{ManifestSource, MANIFEST_FILENAME};
