pub mod collect_libraries;

pub use collect_libraries::CollectLibrariesUseCase;
