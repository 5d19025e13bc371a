//! Configuration module for xfact
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (XFACT_*)
//! 3. Project config (./xfact.toml)
//! 4. User config (~/.config/xfact/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    discover, discover_with_env, user_config_path, with_env_overrides_from, ConfigWarning,
    LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, ComputeConfig, Config, DemoConfig, InteractiveConfig, OutputConfig};
