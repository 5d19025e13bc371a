//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::XfactResult;
use crate::models::Width;
use crate::session::{DEFAULT_PROMPT, DEFAULT_SENTINEL, DEMO_INPUTS};

use super::loader::{self, ConfigWarning};

/// Computation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ComputeConfig {
    #[serde(default)]
    pub width: Width,
}

/// Demonstration sequence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_demo_inputs")]
    pub inputs: Vec<i64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            inputs: default_demo_inputs(),
        }
    }
}

fn default_demo_inputs() -> Vec<i64> {
    DEMO_INPUTS.to_vec()
}

/// Interactive session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractiveConfig {
    #[serde(default = "default_sentinel")]
    pub sentinel: i64,

    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for InteractiveConfig {
    fn default() -> Self {
        Self {
            sentinel: default_sentinel(),
            prompt: default_prompt(),
        }
    }
}

fn default_sentinel() -> i64 {
    DEFAULT_SENTINEL
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub compute: ComputeConfig,

    #[serde(default)]
    pub demo: DemoConfig,

    #[serde(default)]
    pub interactive: InteractiveConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> XfactResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Demo inputs widened for the session driver
    pub fn demo_inputs(&self) -> Vec<i128> {
        self.demo.inputs.iter().copied().map(i128::from).collect()
    }
}
