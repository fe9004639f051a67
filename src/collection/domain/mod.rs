/// Domain layer - Pure data model for collected dependency metadata
pub mod container;
pub mod coordinate;
pub mod descriptor;
pub mod library;

pub use container::CollectedContainer;
pub use coordinate::Coordinate;
pub use descriptor::{RawDescriptor, RawLicense, ResolutionFailure, VariantResolution};
pub use library::{Developer, Funding, Library, License, Organization, Scm};
