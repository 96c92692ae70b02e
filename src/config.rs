//! Configuration schema for codescope.
//!
//! Every field is optional. An empty file behaves exactly like no file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::advisor::Thresholds;

/// Default config file names to search for.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["codescope.yaml", ".codescope.yaml"];

/// Largest input accepted by default (1 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Extensions scanned when analyzing a directory.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "py", "cpp", "js", "java", "c", "ts", "jsx", "tsx", "cs", "go", "rs", "php", "rb", "swift",
    "kt",
];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub version: String,
    /// Advisor thresholds
    #[serde(default)]
    pub thresholds: Thresholds,
    /// Maximum input size in bytes (default: 1 MiB)
    #[serde(default)]
    pub max_input_bytes: Option<usize>,
    /// File extensions to scan, without the leading dot (default: common source types)
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Glob patterns for paths to skip during directory scans (e.g., "**/generated/**")
    #[serde(default)]
    pub excluded_paths: Vec<String>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse_str(&content)
    }

    /// Parse a config from YAML text. Blank text yields the defaults.
    pub fn parse_str(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Look for a config file in `dir`.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        DEFAULT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Returns the input size limit (defaults to 1 MiB).
    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES)
    }

    /// Check whether a file extension is accepted for scanning.
    pub fn is_supported_extension(&self, ext: &str) -> bool {
        let ext = ext.trim_start_matches('.').to_lowercase();
        if self.extensions.is_empty() {
            return DEFAULT_EXTENSIONS.contains(&ext.as_str());
        }
        self.extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(&ext))
    }

    /// Check if a path should be excluded based on excluded_paths patterns.
    /// Uses globset for matching, which supports `**` for recursive directory matching.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();

        self.excluded_paths.iter().any(|pattern| {
            globset::Glob::new(pattern)
                .map(|glob| glob.compile_matcher().is_match(&*path_str))
                .unwrap_or(false)
        })
    }
}

/// Validate a config for correctness.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    if config.max_input_bytes == Some(0) {
        anyhow::bail!("max_input_bytes must be greater than zero");
    }

    for ext in &config.extensions {
        if ext.trim_start_matches('.').trim().is_empty() {
            anyhow::bail!("extensions must not contain empty entries");
        }
    }

    for pattern in &config.excluded_paths {
        globset::Glob::new(pattern)
            .map_err(|e| anyhow::anyhow!("invalid excluded_paths pattern {:?}: {}", pattern, e))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::defaults;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config() {
        let yaml = r#"
version: "1"
thresholds:
  cyclomatic: 8
max_input_bytes: 2048
extensions: ["py", ".rs"]
excluded_paths:
  - "**/generated/**"
"#;
        let config = Config::parse_str(yaml).unwrap();
        assert_eq!(config.thresholds.cyclomatic, 8);
        // unspecified thresholds keep their defaults
        assert_eq!(config.thresholds.cognitive, defaults::COGNITIVE);
        assert_eq!(config.max_input_bytes(), 2048);
        assert!(config.is_supported_extension("rs"));
        assert!(config.is_supported_extension(".PY"));
        assert!(!config.is_supported_extension("go"));
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse_str("").unwrap();
        assert_eq!(config.thresholds, Thresholds::default());
        assert_eq!(config.max_input_bytes(), DEFAULT_MAX_INPUT_BYTES);
        assert!(config.is_supported_extension("go"));
        assert!(config.is_supported_extension("kt"));
        assert!(!config.is_supported_extension("txt"));
    }

    #[test]
    fn test_excluded_paths() {
        let config = Config {
            excluded_paths: vec!["**/vendor/**".to_string()],
            ..Default::default()
        };
        assert!(config.is_path_excluded(Path::new("src/vendor/lib.js")));
        assert!(!config.is_path_excluded(Path::new("src/app.js")));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero = Config {
            max_input_bytes: Some(0),
            ..Default::default()
        };
        assert!(validate(&zero).is_err());

        let bad_glob = Config {
            excluded_paths: vec!["[unclosed".to_string()],
            ..Default::default()
        };
        assert!(validate(&bad_glob).is_err());

        let empty_ext = Config {
            extensions: vec![".".to_string()],
            ..Default::default()
        };
        assert!(validate(&empty_ext).is_err());
    }

    #[test]
    fn test_discover() {
        let temp = TempDir::new().unwrap();
        assert!(Config::discover(temp.path()).is_none());

        std::fs::write(temp.path().join(".codescope.yaml"), "version: \"1\"\n").unwrap();
        let found = Config::discover(temp.path()).unwrap();
        assert!(found.ends_with(".codescope.yaml"));
        assert_eq!(Config::parse_file(found).unwrap().version, "1");
    }
}
