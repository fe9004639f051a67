use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - collection completed and the artifact was written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (resolution failure, malformed manifest, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency collection.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("Failed to resolve dependency configuration for variant '{variant}': {coordinate}\n\n💡 Hint: Re-export the dependency manifest from the build host, or run with --best-effort to skip unresolvable variants")]
    Resolution { coordinate: String, variant: String },

    #[error("Malformed coordinate: group='{group}', artifact='{artifact}'\n\n💡 Hint: A descriptor needs a non-blank group and artifact to derive a stable identifier")]
    MalformedCoordinate { group: String, artifact: String },

    #[error("Failed to serialize or deserialize the dependency cache: {path}\nDetails: {details}\n\n💡 Hint: Delete the cache file and re-run the collection to rebuild it")]
    Serialization { path: PathBuf, details: String },

    #[error("Dependency cache not found: {path}")]
    CacheMiss { path: PathBuf },

    #[error("Dependency manifest not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dependency manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the manifest is in the correct TOML format")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_resolution_error_display() {
        let error = CollectError::Resolution {
            coordinate: "com.example:broken".to_string(),
            variant: "jvmMain".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("jvmMain"));
        assert!(display.contains("com.example:broken"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_malformed_coordinate_display() {
        let error = CollectError::MalformedCoordinate {
            group: "".to_string(),
            artifact: "lib".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Malformed coordinate"));
        assert!(display.contains("artifact='lib'"));
    }

    #[test]
    fn test_serialization_error_display() {
        let error = CollectError::Serialization {
            path: PathBuf::from("/build/dependency-cache.json"),
            details: "unexpected end of input".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("/build/dependency-cache.json"));
        assert!(display.contains("unexpected end of input"));
    }

    #[test]
    fn test_cache_miss_display() {
        let error = CollectError::CacheMiss {
            path: PathBuf::from("/build/dependency-cache.json"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Dependency cache not found"));
    }

    #[test]
    fn test_invalid_project_path_display() {
        let error = CollectError::InvalidProjectPath {
            path: PathBuf::from("/invalid/path"),
            reason: "Directory does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid project path"));
        assert!(display.contains("/invalid/path"));
        assert!(display.contains("Directory does not exist"));
    }
}
