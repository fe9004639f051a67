use clap::Parser;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::str::FromStr;

use crate::application::dto::CollectConfig;
use crate::collection::policies::VersionPolicy;
use crate::config::ConfigFile;

/// Default cache location relative to the project directory.
const DEFAULT_CACHE_PATH: &str = "build/oss-collector/dependency-cache.json";

/// Collect open-source license and dependency metadata into a cacheable artifact
#[derive(Parser, Debug)]
#[command(name = "oss-collector")]
#[command(version)]
#[command(
    about = "Collect open-source license and dependency metadata into a cacheable artifact",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output path for the dependency cache (defaults to
    /// build/oss-collector/dependency-cache.json inside the project)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Only keep dependencies contributed by these platforms.
    /// Can be specified multiple times; omit to allow all platforms.
    #[arg(long = "include-platform", value_name = "PLATFORM")]
    pub include_platform: Vec<String>,

    /// Only keep dependencies contributed by these variants.
    /// Can be specified multiple times; omit to allow all variants.
    #[arg(long = "filter-variant", value_name = "VARIANT")]
    pub filter_variants: Vec<String>,

    /// Version-conflict policy: highest or keep-all
    #[arg(long)]
    pub version_policy: Option<VersionPolicy>,

    /// Skip variants whose configuration cannot be resolved instead of
    /// aborting the run
    #[arg(long)]
    pub best_effort: bool,

    /// Explicit config file path (defaults to discovering
    /// oss-collector.config.yml in the project directory)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merges CLI flags over config-file values into the run configuration.
    /// CLI always wins; the file only fills what the CLI left unset.
    pub fn resolve_config(&self, file: Option<&ConfigFile>) -> CollectConfig {
        let include_platform: BTreeSet<String> = if self.include_platform.is_empty() {
            file.and_then(|f| f.include_platform.clone())
                .unwrap_or_default()
                .into_iter()
                .collect()
        } else {
            self.include_platform.iter().cloned().collect()
        };

        let filter_variants: BTreeSet<String> = if self.filter_variants.is_empty() {
            file.and_then(|f| f.filter_variants.clone())
                .unwrap_or_default()
                .into_iter()
                .collect()
        } else {
            self.filter_variants.iter().cloned().collect()
        };

        let version_policy = self
            .version_policy
            .or_else(|| {
                file.and_then(|f| f.version_policy.as_deref())
                    // Validated at config load time.
                    .and_then(|policy| VersionPolicy::from_str(policy).ok())
            })
            .unwrap_or_default();

        let fail_fast = if self.best_effort {
            false
        } else {
            file.and_then(|f| f.fail_fast).unwrap_or(true)
        };

        CollectConfig {
            include_platform,
            filter_variants,
            version_policy,
            fail_fast,
        }
    }

    /// Resolves the cache output location.
    pub fn resolve_output(&self, project_path: &std::path::Path, file: Option<&ConfigFile>) -> PathBuf {
        if let Some(output) = &self.output {
            return PathBuf::from(output);
        }
        if let Some(output) = file.and_then(|f| f.output.as_deref()) {
            return project_path.join(output);
        }
        project_path.join(DEFAULT_CACHE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn bare_args() -> Args {
        Args {
            path: None,
            output: None,
            include_platform: vec![],
            filter_variants: vec![],
            version_policy: None,
            best_effort: false,
            config: None,
        }
    }

    #[test]
    fn test_resolve_config_defaults() {
        let config = bare_args().resolve_config(None);
        assert!(config.include_platform.is_empty());
        assert!(config.filter_variants.is_empty());
        assert_eq!(config.version_policy, VersionPolicy::Highest);
        assert!(config.fail_fast);
    }

    #[test]
    fn test_cli_flags_override_config_file() {
        let mut args = bare_args();
        args.include_platform = vec!["jvm".to_string()];
        args.version_policy = Some(VersionPolicy::KeepAll);

        let file = ConfigFile {
            include_platform: Some(vec!["js".to_string()]),
            version_policy: Some("highest".to_string()),
            ..ConfigFile::default()
        };

        let config = args.resolve_config(Some(&file));
        assert!(config.include_platform.contains("jvm"));
        assert!(!config.include_platform.contains("js"));
        assert_eq!(config.version_policy, VersionPolicy::KeepAll);
    }

    #[test]
    fn test_config_file_fills_unset_flags() {
        let file = ConfigFile {
            filter_variants: Some(vec!["release".to_string()]),
            version_policy: Some("keep-all".to_string()),
            fail_fast: Some(false),
            ..ConfigFile::default()
        };

        let config = bare_args().resolve_config(Some(&file));
        assert!(config.filter_variants.contains("release"));
        assert_eq!(config.version_policy, VersionPolicy::KeepAll);
        assert!(!config.fail_fast);
    }

    #[test]
    fn test_best_effort_flag_disables_fail_fast() {
        let mut args = bare_args();
        args.best_effort = true;

        let file = ConfigFile {
            fail_fast: Some(true),
            ..ConfigFile::default()
        };

        let config = args.resolve_config(Some(&file));
        assert!(!config.fail_fast);
    }

    #[test]
    fn test_resolve_output_default() {
        let output = bare_args().resolve_output(Path::new("/project"), None);
        assert_eq!(
            output,
            Path::new("/project/build/oss-collector/dependency-cache.json")
        );
    }

    #[test]
    fn test_resolve_output_cli_wins() {
        let mut args = bare_args();
        args.output = Some("/tmp/cache.json".to_string());

        let file = ConfigFile {
            output: Some("build/other.json".to_string()),
            ..ConfigFile::default()
        };

        let output = args.resolve_output(Path::new("/project"), Some(&file));
        assert_eq!(output, Path::new("/tmp/cache.json"));
    }

    #[test]
    fn test_resolve_output_config_file_relative_to_project() {
        let file = ConfigFile {
            output: Some("build/other.json".to_string()),
            ..ConfigFile::default()
        };

        let output = bare_args().resolve_output(Path::new("/project"), Some(&file));
        assert_eq!(output, Path::new("/project/build/other.json"));
    }
}
