//! Configuration for the featured-slot policy.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (SHOWCASE_MAX_FEATURED_HIGHLIGHTS, SHOWCASE_MAX_FEATURED_PROJECTS)
//! 2. Config file (.showcase/config.yaml)
//! 3. Defaults (6 featured items per kind)
//!
//! Config file discovery:
//! - Searches current directory and parents for .showcase/config.yaml
//! - Falls back to ~/.showcase/config.yaml

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::PolicySettings;

pub const ENV_MAX_FEATURED_HIGHLIGHTS: &str = "SHOWCASE_MAX_FEATURED_HIGHLIGHTS";
pub const ENV_MAX_FEATURED_PROJECTS: &str = "SHOWCASE_MAX_FEATURED_PROJECTS";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub policy: PolicySettings,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Featured maxima per entity kind
    pub policy: PolicySettings,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".showcase").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let home_config = dirs::home_dir()?.join(".showcase").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse an env override, if set
fn env_max(name: &str) -> Result<Option<u32>> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} must be a positive integer, got '{}'", name, value)),
        Err(_) => Ok(None),
    }
}

/// Reject a zero ceiling; it would block every featured submission
fn check_policy(policy: &PolicySettings) -> Result<()> {
    if policy.max_featured_highlights == 0 {
        bail!("max_featured_highlights must be greater than 0");
    }
    if policy.max_featured_projects == 0 {
        bail!("max_featured_projects must be greater than 0");
    }
    Ok(())
}

/// Merge env overrides over file settings
fn resolve(config_file: Option<PathBuf>, mut policy: PolicySettings) -> Result<ResolvedConfig> {
    if let Some(max) = env_max(ENV_MAX_FEATURED_HIGHLIGHTS)? {
        policy.max_featured_highlights = max;
    }
    if let Some(max) = env_max(ENV_MAX_FEATURED_PROJECTS)? {
        policy.max_featured_projects = max;
    }

    check_policy(&policy)?;

    Ok(ResolvedConfig {
        policy,
        config_file,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();

    let policy = match config_file {
        Some(ref path) => load_config_file(path)?.policy,
        None => PolicySettings::default(),
    };

    resolve(config_file, policy)
}

/// Load configuration from an explicit file, still honoring env overrides
pub fn load_from(path: &Path) -> Result<ResolvedConfig> {
    let file = load_config_file(path)?;
    resolve(Some(path.to_path_buf()), file.policy)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
