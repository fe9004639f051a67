use crate::application::dto::{CollectRequest, CollectResponse};
use crate::collection::services::{normalize, Aggregator, NormalizedVariant};
use crate::ports::outbound::{DependencySource, ProgressReporter};
use crate::shared::{CollectError, Result};

/// CollectLibrariesUseCase - Core use case for dependency collection
///
/// Orchestrates the resolve → normalize → aggregate pipeline using generic
/// dependency injection for all infrastructure dependencies. The source
/// adapter may resolve variants in parallel; everything after the resolved
/// list arrives here is pure computation, so aggregation starts only once all
/// variant results are in.
///
/// # Type Parameters
/// * `S` - DependencySource implementation
/// * `PR` - ProgressReporter implementation
pub struct CollectLibrariesUseCase<S, PR> {
    source: S,
    progress_reporter: PR,
}

impl<S, PR> CollectLibrariesUseCase<S, PR>
where
    S: DependencySource,
    PR: ProgressReporter,
{
    /// Creates a new CollectLibrariesUseCase with injected dependencies
    pub fn new(source: S, progress_reporter: PR) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// Executes the collection use case
    ///
    /// # Arguments
    /// * `request` - Collection request containing project path and options
    ///
    /// # Returns
    /// CollectResponse with the aggregated container and run statistics
    ///
    /// # Errors
    /// Fails when the manifest tree cannot be read, or, under fail-fast, when
    /// any variant's configuration is unresolvable.
    pub async fn execute(&self, request: CollectRequest) -> Result<CollectResponse> {
        self.progress_reporter.report(&format!(
            "🔍 Collecting dependencies for: {}",
            request.project_path.display()
        ));

        let resolutions = self.source.collect(&request.project_path).await?;
        let total = resolutions.len();
        self.progress_reporter
            .report(&format!("✅ Resolved {} variant configuration(s)", total));

        let mut normalized = Vec::new();
        let mut skipped_variants = Vec::new();
        let mut dropped_descriptors = 0;

        for (idx, resolution) in resolutions.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(&resolution.variant));

            let descriptors = match resolution.outcome {
                Ok(descriptors) => descriptors,
                Err(failure) => {
                    if request.config.fail_fast {
                        return Err(CollectError::Resolution {
                            coordinate: failure.coordinate,
                            variant: failure.variant,
                        }
                        .into());
                    }
                    self.progress_reporter.report_error(&format!(
                        "Skipping variant '{}': could not resolve {}",
                        failure.variant, failure.coordinate
                    ));
                    skipped_variants.push(failure.variant);
                    continue;
                }
            };

            let mut libraries = Vec::with_capacity(descriptors.len());
            for descriptor in &descriptors {
                match normalize(descriptor) {
                    Ok(library) => libraries.push(library),
                    Err(error) => {
                        // A descriptor without a derivable coordinate is
                        // dropped with a diagnostic, never merged under a
                        // guessed identifier.
                        dropped_descriptors += 1;
                        self.progress_reporter.report_error(&format!(
                            "Dropping descriptor in variant '{}': {}",
                            resolution.variant, error
                        ));
                    }
                }
            }

            normalized.push(NormalizedVariant {
                variant: resolution.variant,
                platform: resolution.platform,
                libraries,
            });
        }

        let aggregator = Aggregator::new(
            request.config.include_platform.clone(),
            request.config.filter_variants.clone(),
            request.config.version_policy,
        );
        let outcome = aggregator.aggregate(normalized);

        for diagnostic in &outcome.diagnostics {
            self.progress_reporter.report_error(&diagnostic.to_string());
        }

        self.progress_reporter.report_completion(&format!(
            "Collected {} librar{} from {} variant(s)",
            outcome.container.len(),
            if outcome.container.len() == 1 { "y" } else { "ies" },
            outcome.container.variants.len()
        ));

        Ok(CollectResponse::new(
            outcome.container,
            outcome.diagnostics,
            skipped_variants,
            dropped_descriptors,
        ))
    }
}
