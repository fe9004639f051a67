/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (build host exports, file system,
/// console, etc.).
pub mod cache_store;
pub mod dependency_source;
pub mod progress_reporter;

pub use cache_store::CacheStore;
pub use dependency_source::DependencySource;
pub use progress_reporter::ProgressReporter;
