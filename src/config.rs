//! Configuration for depscout.
//!
//! Built-in defaults can be overridden by a YAML file (`depscout.config.yml`,
//! auto-discovered in the working directory or passed with `--config`) and
//! then by command-line flags.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::dependency_lookup::domain::RepositoryIdentifier;
use crate::dependency_lookup::policies::RetryPolicy;
use crate::shared::error::ScoutError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "depscout.config.yml";

pub const DEFAULT_REGISTRY_URL: &str = "https://npmjs.com";
pub const DEFAULT_RAW_CONTENT_URL: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_REPOSITORY_HOST: &str = "https://github.com/";
pub const DEFAULT_BRANCHES: [&str; 2] = ["main", "master"];
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;

/// Effective runtime configuration passed into the network adapters
/// and the lookup use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoutConfig {
    /// Registry web host; package pages live under `{registry_url}/package/<name>`
    pub registry_url: String,
    /// Raw file host; manifests live under `{raw_content_url}/<owner>/<repo>/<branch>/package.json`
    pub raw_content_url: String,
    /// Prefix stripped from repository links to obtain `owner/name`
    pub repository_host: String,
    /// Branches tried in order when fetching the manifest
    pub branches: Vec<String>,
    pub timeout: Duration,
    pub max_attempts: u32,
    pub retry_delay: Duration,
    pub proxy: Option<String>,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            raw_content_url: DEFAULT_RAW_CONTENT_URL.to_string(),
            repository_host: DEFAULT_REPOSITORY_HOST.to_string(),
            branches: DEFAULT_BRANCHES.iter().map(|b| b.to_string()).collect(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            proxy: None,
        }
    }
}

impl ScoutConfig {
    pub fn package_page_url(&self, package_name: &str) -> String {
        format!(
            "{}/package/{}",
            self.registry_url.trim_end_matches('/'),
            package_name
        )
    }

    pub fn manifest_url(&self, repository: &RepositoryIdentifier, branch: &str) -> String {
        format!(
            "{}/{}/{}/package.json",
            self.raw_content_url.trim_end_matches('/'),
            repository,
            branch
        )
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, self.retry_delay)
    }

    /// Layers the values present in `file` over `self`.
    pub fn merge_file(mut self, file: ConfigFile) -> Self {
        if let Some(url) = file.registry_url {
            self.registry_url = url;
        }
        if let Some(url) = file.raw_content_url {
            self.raw_content_url = url;
        }
        if let Some(host) = file.repository_host {
            self.repository_host = host;
        }
        if let Some(branches) = file.branches {
            self.branches = branches;
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(attempts) = file.max_attempts {
            self.max_attempts = attempts;
        }
        if let Some(ms) = file.retry_delay_ms {
            self.retry_delay = Duration::from_millis(ms);
        }
        if file.proxy.is_some() {
            self.proxy = file.proxy;
        }
        self
    }

    /// Layers command-line overrides over `self`.
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.registry_url {
            self.registry_url = url;
        }
        if let Some(url) = overrides.raw_content_url {
            self.raw_content_url = url;
        }
        if !overrides.branches.is_empty() {
            self.branches = overrides.branches;
        }
        if let Some(secs) = overrides.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(attempts) = overrides.max_attempts {
            self.max_attempts = attempts;
        }
        self
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        for (field, value) in [
            ("registry_url", &self.registry_url),
            ("raw_content_url", &self.raw_content_url),
            ("repository_host", &self.repository_host),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{} must not be empty", field));
            }
        }
        if self.branches.is_empty() {
            return Err("branches must list at least one branch".to_string());
        }
        if let Some(i) = self.branches.iter().position(|b| b.trim().is_empty()) {
            return Err(format!("branches[{}] must not be empty", i));
        }
        if self.timeout.is_zero() {
            return Err("timeout must be greater than zero".to_string());
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub registry_url: Option<String>,
    pub raw_content_url: Option<String>,
    pub branches: Vec<String>,
    pub timeout_secs: Option<u64>,
    pub max_attempts: Option<u32>,
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub registry_url: Option<String>,
    pub raw_content_url: Option<String>,
    pub repository_host: Option<String>,
    pub branches: Option<Vec<String>>,
    pub timeout_secs: Option<u64>,
    pub max_attempts: Option<u32>,
    pub retry_delay_ms: Option<u64>,
    pub proxy: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<(PathBuf, ConfigFile)>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some((config_path, config)))
}

/// Builds the effective configuration: defaults, then the config file
/// (explicit path or discovered in `working_dir`), then `overrides`.
pub fn resolve_config(
    explicit_path: Option<&Path>,
    working_dir: &Path,
    overrides: ConfigOverrides,
) -> Result<ScoutConfig> {
    let file = match explicit_path {
        Some(path) => Some((path.to_path_buf(), load_config_from_path(path)?)),
        None => discover_config(working_dir)?,
    };

    let mut config = ScoutConfig::default();
    if let Some((path, file)) = file {
        tracing::debug!(path = %path.display(), "loaded config file");
        config = config.merge_file(file);
        config
            .validate()
            .map_err(|details| ScoutError::Config { path, details })?;
    }

    let config = config.apply_overrides(overrides);
    config
        .validate()
        .map_err(|message| ScoutError::Validation { message })?;

    Ok(config)
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_public_hosts() {
        let config = ScoutConfig::default();
        assert_eq!(
            config.package_page_url("chalk"),
            "https://npmjs.com/package/chalk"
        );
        let repo = RepositoryIdentifier::from_link(
            "https://github.com/chalk/chalk",
            &config.repository_host,
        )
        .unwrap();
        assert_eq!(
            config.manifest_url(&repo, "main"),
            "https://raw.githubusercontent.com/chalk/chalk/main/package.json"
        );
        assert_eq!(config.branches, vec!["main", "master"]);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_urls_tolerate_trailing_slash() {
        let config = ScoutConfig {
            registry_url: "http://127.0.0.1:9000/".to_string(),
            ..ScoutConfig::default()
        };
        assert_eq!(
            config.package_page_url("@types/node"),
            "http://127.0.0.1:9000/package/@types/node"
        );
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
registry_url: https://registry.example.com
raw_content_url: https://raw.example.com
branches:
  - trunk
  - main
timeout_secs: 5
max_attempts: 2
retry_delay_ms: 0
proxy: http://proxy.local:3128
"#,
        )
        .unwrap();

        let file = load_config_from_path(&config_path).unwrap();
        let config = ScoutConfig::default().merge_file(file);
        assert_eq!(config.registry_url, "https://registry.example.com");
        assert_eq!(config.raw_content_url, "https://raw.example.com");
        assert_eq!(config.repository_host, DEFAULT_REPOSITORY_HOST);
        assert_eq!(config.branches, vec!["trunk", "main"]);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_attempts, 2);
        assert_eq!(config.retry_delay, Duration::ZERO);
        assert_eq!(config.proxy.as_deref(), Some("http://proxy.local:3128"));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "max_attempts: 7\n").unwrap();

        let (path, file) = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(path, dir.path().join(CONFIG_FILENAME));
        assert_eq!(file.max_attempts, Some(7));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/depscout.config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "branches: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_fields_captured() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "max_attempts: 2\ncolour: always\n").unwrap();

        let file = load_config_from_path(&config_path).unwrap();
        assert_eq!(file.unknown_fields.len(), 1);
        assert!(file.unknown_fields.contains_key("colour"));
    }

    #[test]
    fn test_resolve_config_rejects_empty_branch_list() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "branches: []\n").unwrap();

        let err = resolve_config(None, dir.path(), ConfigOverrides::default()).unwrap_err();
        let message = format!("{}", err);
        assert!(message.contains("Invalid configuration"));
        assert!(message.contains("at least one branch"));
    }

    #[test]
    fn test_resolve_config_overrides_win_over_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "max_attempts: 9\nbranches: [develop]\ntimeout_secs: 12\n",
        )
        .unwrap();

        let overrides = ConfigOverrides {
            max_attempts: Some(2),
            branches: vec!["main".to_string()],
            ..ConfigOverrides::default()
        };
        let config = resolve_config(None, dir.path(), overrides).unwrap();
        assert_eq!(config.max_attempts, 2);
        assert_eq!(config.branches, vec!["main"]);
        assert_eq!(config.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_resolve_config_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yml");
        fs::write(&path, "registry_url: http://localhost:1234\n").unwrap();

        let other = TempDir::new().unwrap();
        let config = resolve_config(Some(&path), other.path(), ConfigOverrides::default()).unwrap();
        assert_eq!(config.registry_url, "http://localhost:1234");
    }

    #[test]
    fn test_resolve_config_rejects_zero_attempts_override() {
        let dir = TempDir::new().unwrap();
        let overrides = ConfigOverrides {
            max_attempts: Some(0),
            ..ConfigOverrides::default()
        };
        let err = resolve_config(None, dir.path(), overrides).unwrap_err();
        assert!(format!("{}", err).contains("max_attempts"));
    }

    #[test]
    fn test_retry_policy_from_config() {
        let config = ScoutConfig {
            max_attempts: 3,
            retry_delay: Duration::from_millis(10),
            ..ScoutConfig::default()
        };
        let policy = config.retry_policy();
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.delay_for(2), Duration::from_millis(20));
    }
}
