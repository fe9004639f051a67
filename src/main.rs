mod adapters;
mod application;
mod cli;
mod collection;
mod config;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{JsonCacheFile, ManifestSource};
use application::collector_task::CollectorTask;
use application::dto::CollectRequest;
use cli::Args;
use owo_colors::OwoColorize;
use shared::error::CollectError;
use shared::{ExitCode, Result};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);
    validate_project_path(&project_path)?;

    // Explicit config path fails hard when missing; discovery stays silent.
    let config_file = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(&project_path)?,
    };

    let collect_config = args.resolve_config(config_file.as_ref());
    let output_path = args.resolve_output(&project_path, config_file.as_ref());

    // Create adapters (Dependency Injection)
    let source = ManifestSource::new();
    let progress_reporter = StderrProgressReporter::new();
    let cache = JsonCacheFile::new(output_path);

    let task = CollectorTask::new(
        source,
        progress_reporter,
        cache,
        CollectRequest::new(project_path, collect_config),
    );

    let executed = task.configure().await?.run()?;

    if !executed.response.skipped_variants.is_empty() {
        eprintln!(
            "⚠️  Skipped {} unresolvable variant(s): {}",
            executed.response.skipped_variants.len(),
            executed.response.skipped_variants.join(", ")
        );
    }
    if executed.response.dropped_descriptors > 0 {
        eprintln!(
            "⚠️  Dropped {} descriptor(s) with malformed coordinates",
            executed.response.dropped_descriptors
        );
    }
    eprintln!(
        "📦 Dependency cache written to: {}",
        executed.location.display()
    );

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CollectError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(CollectError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_project_path(temp_dir.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let nonexistent_path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let result = validate_project_path(&nonexistent_path);
        assert!(result.is_err());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test_file.txt");
        fs::write(&file_path, "test content").unwrap();

        let result = validate_project_path(&file_path);
        assert!(result.is_err());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Not a directory"));
    }
}
