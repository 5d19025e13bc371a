//! Configuration discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{XfactError, XfactResult};
use crate::models::Width;

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config};

/// Project-level config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "xfact.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Effective configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration was read from (`None` means built-in defaults)
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> XfactResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| XfactError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            log::debug!("unknown config key '{}' in {}", path_str, path.display());
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration from the process environment.
///
/// An explicit path must exist; otherwise the project config wins over the
/// user config, and defaults are used when neither is present.
pub fn discover(explicit: Option<&Path>, project_root: Option<&Path>) -> XfactResult<LoadedConfig> {
    discover_with_env(explicit, project_root, |key| std::env::var(key).ok())
}

/// Same as [`discover`] with an injectable environment lookup.
pub fn discover_with_env<F>(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
    get_env: F,
) -> XfactResult<LoadedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let source = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(XfactError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Some(path.to_path_buf())
        }
        None => project_root
            .map(|root| root.join(PROJECT_CONFIG_FILE))
            .filter(|p| p.exists())
            .or_else(|| user_config_path(&get_env).filter(|p| p.exists())),
    };

    let (config, warnings) = match &source {
        Some(path) => {
            log::debug!("loading config from {}", path.display());
            load_with_warnings(path)?
        }
        None => {
            log::debug!("no config file found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides_from(config, &get_env),
        source,
        warnings,
    })
}

/// User config location: `XFACT_USER_CONFIG_PATH`, else
/// `$XDG_CONFIG_HOME/xfact/config.toml`, else `~/.config/xfact/config.toml`.
pub fn user_config_path<F>(get_env: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = get_env("XFACT_USER_CONFIG_PATH") {
        return Some(PathBuf::from(path));
    }

    get_env("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|dir| dir.join("xfact").join("config.toml"))
}

/// Apply environment variable overrides (XFACT_* prefix)
pub fn with_env_overrides_from<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // XFACT_WIDTH
    if let Some(value) = get_env("XFACT_WIDTH") {
        let validator = EnvVarValidator::new("XFACT_WIDTH", &["i32", "i64", "i128"]);
        config.compute.width = validator.parse(&value, Width::from_name, config.compute.width);
        log::debug!("XFACT_WIDTH override: {}", config.compute.width);
    }

    // XFACT_SENTINEL
    if let Some(value) = get_env("XFACT_SENTINEL") {
        match value.trim().parse::<i64>() {
            Ok(sentinel) => config.interactive.sentinel = sentinel,
            Err(_) => log::warn!("ignoring XFACT_SENTINEL='{}': not an integer", value),
        }
    }

    // XFACT_NO_COLOR (any value)
    if get_env("XFACT_NO_COLOR").is_some() {
        config.output.color = ColorMode::Never;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "compute",
        "width",
        "demo",
        "inputs",
        "interactive",
        "sentinel",
        "prompt",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
