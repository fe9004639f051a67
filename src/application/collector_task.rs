use std::path::PathBuf;

use crate::application::dto::{CollectRequest, CollectResponse};
use crate::application::use_cases::CollectLibrariesUseCase;
use crate::collection::domain::CollectedContainer;
use crate::ports::outbound::{CacheStore, DependencySource, ProgressReporter};
use crate::shared::Result;

/// Two-phase collector task: `configure()` runs the collection pipeline,
/// `run()` persists the result.
///
/// The phases are separate types, so writing the cache before collecting is
/// unrepresentable - the Unconfigured state simply has no `run`. A failed
/// `configure` never touches the cache, which keeps a previously valid
/// artifact intact across failed runs.
pub struct CollectorTask<S, PR, C> {
    use_case: CollectLibrariesUseCase<S, PR>,
    cache: C,
    request: CollectRequest,
}

impl<S, PR, C> CollectorTask<S, PR, C>
where
    S: DependencySource,
    PR: ProgressReporter,
    C: CacheStore,
{
    pub fn new(source: S, progress_reporter: PR, cache: C, request: CollectRequest) -> Self {
        Self {
            use_case: CollectLibrariesUseCase::new(source, progress_reporter),
            cache,
            request,
        }
    }

    /// Collects and aggregates the dependency set, consuming the task and
    /// producing its configured successor.
    pub async fn configure(self) -> Result<ConfiguredTask<C>> {
        let response = self.use_case.execute(self.request).await?;
        Ok(ConfiguredTask {
            response,
            cache: self.cache,
        })
    }
}

/// A task whose collection phase completed. The container is available for
/// inspection before (or without) persisting it.
#[derive(Debug)]
pub struct ConfiguredTask<C> {
    response: CollectResponse,
    cache: C,
}

impl<C: CacheStore> ConfiguredTask<C> {
    pub fn container(&self) -> &CollectedContainer {
        &self.response.container
    }

    pub fn response(&self) -> &CollectResponse {
        &self.response
    }

    /// Writes the aggregated container to the cache store.
    pub fn run(self) -> Result<ExecutedTask> {
        let location = self.cache.write(&self.response.container)?;
        Ok(ExecutedTask {
            location,
            response: self.response,
        })
    }
}

/// Terminal state: the artifact has been written.
pub struct ExecutedTask {
    pub location: PathBuf,
    pub response: CollectResponse,
}
