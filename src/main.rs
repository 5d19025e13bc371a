//! xfact CLI - factorial calculator with overflow detection
//!
//! Usage: xfact [COMMAND]
//!
//! Commands:
//!   demo         Print the demonstration sequence
//!   compute      Compute the factorial of each argument
//!   interactive  Read integers from stdin until the sentinel value
//!   limits       Show the largest argument each width can handle
//!   version      Show version information
//!
//! Without a command, runs the demo followed by an interactive session.

mod cli;
mod commands;
mod ui;

use std::env;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands};
use commands::RunContext;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = match load_context(&cli) {
        Ok(ctx) => ctx,
        Err(err) => {
            // No config yet: honor the flags, detect the rest
            let fallback = UiContext::new(cli.json, cli.color, &xfact::Config::default());
            ui::error::print_error(&err, &fallback);
            std::process::exit(1);
        }
    };

    if let Err(err) = dispatch(&ctx, cli.command) {
        ui::error::print_error(&err, &ctx.ui);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    if env::var_os("RUST_LOG").is_none() {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env::set_var("RUST_LOG", format!("xfact={}", level));
    }
    let _ = pretty_env_logger::try_init();
}

fn load_context(cli: &Cli) -> Result<RunContext> {
    let cwd = env::current_dir().context("failed to determine the working directory")?;
    let loaded = xfact::config::discover(cli.config.as_deref(), Some(&cwd))
        .context("failed to load configuration")?;

    let ui = UiContext::new(cli.json, cli.color, &loaded.config);
    if let Some(path) = &loaded.source {
        ui::output::print_config_warnings(&ui, path, &loaded.warnings);
    }

    let ctx = RunContext {
        width: cli.width.unwrap_or(loaded.config.compute.width),
        ui,
        config: loaded.config,
        config_source: loaded.source,
    };
    log::debug!(
        "width {}, config {:?}, color {}, unicode {}",
        ctx.width,
        ctx.config_source,
        ctx.ui.color,
        ctx.ui.unicode
    );

    Ok(ctx)
}

fn dispatch(ctx: &RunContext, command: Option<Commands>) -> Result<()> {
    log::debug!("dispatching {:?}", command);
    match command {
        None => commands::interactive::cmd_session(ctx),
        Some(Commands::Demo { inputs }) => commands::demo::cmd_demo(ctx, inputs),
        Some(Commands::Compute { numbers }) => commands::compute::cmd_compute(ctx, &numbers),
        Some(Commands::Interactive { sentinel }) => {
            commands::interactive::cmd_interactive(ctx, sentinel)
        }
        Some(Commands::Limits) => commands::limits::cmd_limits(ctx),
        Some(Commands::Version) => commands::version::cmd_version(ctx),
    }
}
