use std::path::PathBuf;

use xfact::{Config, Width};

use crate::ui::context::UiContext;

pub mod compute;
pub mod demo;
pub mod interactive;
pub mod limits;
pub mod version;

/// Everything a command needs after flags, environment and config files
/// have been merged.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub ui: UiContext,
    pub config: Config,
    /// File the config came from (`None` means built-in defaults)
    pub config_source: Option<PathBuf>,
    /// Effective width: `--width`, else XFACT_WIDTH, else config
    pub width: Width,
}
