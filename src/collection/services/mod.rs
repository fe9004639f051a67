/// Services - Pure collection logic (normalization and aggregation)
pub mod aggregator;
pub mod normalizer;

pub use aggregator::{AggregationOutcome, Aggregator, Diagnostic, NormalizedVariant};
pub use normalizer::normalize;
