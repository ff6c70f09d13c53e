use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{CompareMode, TagPattern, Version};
use crate::error::{Result, SemverBumpError};

/// Environment variable naming a configuration file
pub const CONFIG_ENV_VAR: &str = "SEMVER_BUMP_CONFIG";

/// Configuration file looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "semver-bump.toml";

/// Represents the complete configuration for semver-bump.
///
/// Contains the version marker location, tag naming, release side effects and
/// comparison behaviour.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_version_file")]
    pub version_file: PathBuf,

    #[serde(default = "default_initial_version")]
    pub initial_version: String,

    #[serde(default)]
    pub tag: TagConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub compare: CompareConfig,
}

fn default_version_file() -> PathBuf {
    PathBuf::from(".version")
}

fn default_initial_version() -> String {
    "0.0.0".to_string()
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_tag_message() -> String {
    "Release {tag}".to_string()
}

fn default_commit_message() -> String {
    "chore(release): {tag}".to_string()
}

fn default_changelog() -> Option<PathBuf> {
    Some(PathBuf::from("CHANGELOG.md"))
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_push() -> bool {
    true
}

/// Tag naming for releases.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagConfig {
    /// Must contain `{version}`
    #[serde(default = "default_tag_pattern")]
    pub pattern: String,

    /// Annotated tag message; `{tag}` and `{version}` are substituted
    #[serde(default = "default_tag_message")]
    pub message: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            pattern: default_tag_pattern(),
            message: default_tag_message(),
        }
    }
}

/// Side effects of `bump --tag`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Changelog to prepend release notes to; `None` skips it
    #[serde(default = "default_changelog")]
    pub changelog: Option<PathBuf>,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_push")]
    pub push: bool,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            commit_message: default_commit_message(),
            changelog: default_changelog(),
            remote: default_remote(),
            push: default_push(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct CompareConfig {
    #[serde(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version_file: default_version_file(),
            initial_version: default_initial_version(),
            tag: TagConfig::default(),
            release: ReleaseConfig::default(),
            compare: CompareConfig::default(),
        }
    }
}

impl Config {
    /// Rejects values that would only fail later, mid-release.
    pub fn validate(&self) -> Result<()> {
        self.tag_pattern()
            .validate()
            .map_err(|e| SemverBumpError::config(e.to_string()))?;
        self.initial_version()?;
        if self.version_file.as_os_str().is_empty() {
            return Err(SemverBumpError::config("version_file must not be empty"));
        }
        Ok(())
    }

    pub fn tag_pattern(&self) -> TagPattern {
        TagPattern::new(self.tag.pattern.clone())
    }

    pub fn initial_version(&self) -> Result<Version> {
        Version::parse(&self.initial_version).map_err(|e| {
            SemverBumpError::config(format!("initial_version is not usable: {}", e))
        })
    }

    pub fn compare_mode(&self) -> CompareMode {
        if self.compare.strict {
            CompareMode::Strict
        } else {
            CompareMode::Compatible
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. Path in the `SEMVER_BUMP_CONFIG` environment variable
/// 3. `semver-bump.toml` in current directory
/// 4. `.semver-bump.toml` in the user config directory
/// 5. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration, validated
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => locate_config(),
    };

    let config = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            parse_config_file(&path)?
        }
        None => {
            tracing::debug!("no configuration file found, using defaults");
            Config::default()
        }
    };

    config.validate()?;
    Ok(config)
}

fn locate_config() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local.to_path_buf());
    }
    dirs::config_dir()
        .map(|dir| dir.join(".semver-bump.toml"))
        .filter(|path| path.exists())
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|e| {
        SemverBumpError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;
    toml::from_str(&contents)
        .map_err(|e| SemverBumpError::config(format!("cannot parse '{}': {}", path.display(), e)))
}
