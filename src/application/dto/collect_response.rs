use crate::collection::domain::CollectedContainer;
use crate::collection::services::Diagnostic;

/// Response DTO carrying the aggregated container and run statistics.
#[derive(Debug, Clone)]
pub struct CollectResponse {
    pub container: CollectedContainer,
    /// Non-fatal findings from aggregation (e.g. ambiguous version conflicts).
    pub diagnostics: Vec<Diagnostic>,
    /// Variants skipped because their configuration could not be resolved
    /// (best-effort mode only).
    pub skipped_variants: Vec<String>,
    /// Descriptors dropped for lacking a derivable coordinate.
    pub dropped_descriptors: usize,
}

impl CollectResponse {
    pub fn new(
        container: CollectedContainer,
        diagnostics: Vec<Diagnostic>,
        skipped_variants: Vec<String>,
        dropped_descriptors: usize,
    ) -> Self {
        Self {
            container,
            diagnostics,
            skipped_variants,
            dropped_descriptors,
        }
    }
}
