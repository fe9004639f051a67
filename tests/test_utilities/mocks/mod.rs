pub mod mock_dependency_source;
pub mod mock_progress_reporter;

#[allow(unused_imports)]
pub use mock_dependency_source::MockDependencySource;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
