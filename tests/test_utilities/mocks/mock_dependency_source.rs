use async_trait::async_trait;
use oss_collector::prelude::*;
use std::path::Path;

/// Mock DependencySource for testing that returns a fixed resolution set
pub struct MockDependencySource {
    resolutions: Vec<VariantResolution>,
}

impl MockDependencySource {
    pub fn new(resolutions: Vec<VariantResolution>) -> Self {
        Self { resolutions }
    }
}

#[async_trait]
impl DependencySource for MockDependencySource {
    async fn collect(&self, _project_path: &Path) -> Result<Vec<VariantResolution>> {
        Ok(self.resolutions.clone())
    }
}
