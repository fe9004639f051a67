//! oss-collector - Open-source license and dependency metadata collection
//!
//! This library collects the declared and transitive dependency set of a
//! project across build variants and platforms, normalizes each raw
//! descriptor into a canonical `Library`, deduplicates and merges entries
//! across variants, and persists the result as a deterministic, cacheable
//! JSON artifact for downstream reporting layers.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`collection`): Pure data model, policies, and the
//!   normalization/aggregation services
//! - **Application Layer** (`application`): Use cases and the two-phase
//!   collector task
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use oss_collector::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let source = ManifestSource::new();
//! let progress_reporter = StderrProgressReporter::new();
//! let cache = JsonCacheFile::new(PathBuf::from("build/dependency-cache.json"));
//!
//! // Configure, then run: the cache is only written after a successful
//! // collection phase.
//! let request = CollectRequest::new(PathBuf::from("."), CollectConfig::default());
//! let task = CollectorTask::new(source, progress_reporter, cache, request);
//! let executed = task.configure().await?.run()?;
//! eprintln!("artifact at {}", executed.location.display());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod collection;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{JsonCacheFile, ManifestSource};
    pub use crate::application::collector_task::{CollectorTask, ConfiguredTask, ExecutedTask};
    pub use crate::application::dto::{CollectConfig, CollectRequest, CollectResponse};
    pub use crate::application::use_cases::CollectLibrariesUseCase;
    pub use crate::collection::domain::{
        CollectedContainer, Coordinate, Developer, Funding, Library, License, Organization,
        RawDescriptor, RawLicense, Scm, VariantResolution,
    };
    pub use crate::collection::policies::VersionPolicy;
    pub use crate::collection::services::{normalize, Aggregator, Diagnostic, NormalizedVariant};
    pub use crate::ports::outbound::{CacheStore, DependencySource, ProgressReporter};
    pub use crate::shared::Result;
}
