use std::path::PathBuf;

use clap::{Parser, Subcommand};
use xfact::Width;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// xfact - factorial calculator with overflow detection
#[derive(Parser, Debug)]
#[command(name = "xfact")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Run 'xfact' without a command for the demo followed by an interactive session."
)]
pub struct Cli {
    /// Output format for CI (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output: auto, always, never
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Integer width used for computation (overrides config)
    #[arg(long, value_enum, global = true)]
    pub width: Option<Width>,

    /// Config file to use instead of ./xfact.toml or the user config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the demonstration sequence
    Demo {
        /// Comma-separated inputs (defaults to the configured sequence)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        inputs: Option<Vec<i128>>,
    },

    /// Compute the factorial of each argument (exits non-zero if any fails)
    Compute {
        /// Arguments to evaluate
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i128>,
    },

    /// Read integers from stdin until the sentinel value
    Interactive {
        /// Value that ends the session (defaults to the configured sentinel)
        #[arg(long, allow_negative_numbers = true)]
        sentinel: Option<i128>,
    },

    /// Show the largest argument each width can handle
    Limits,

    /// Show version information
    Version,
}
