use std::io::{self, Write};

use anyhow::Result;
use xfact::presentation::{create_renderer, stopped_json, OutputFormat};
use xfact::session::DEFAULT_PROMPT;
use xfact::{run_interactive, InteractiveOptions, SessionEvent, StopReason};

use super::RunContext;
use crate::ui::theme::{colors, icon, icons, icons_ascii, paint};

/// Demo followed by an interactive session
pub fn cmd_session(ctx: &RunContext) -> Result<()> {
    super::demo::cmd_demo(ctx, None)?;
    if !ctx.ui.json {
        println!();
    }
    cmd_interactive(ctx, None)
}

pub fn cmd_interactive(ctx: &RunContext, sentinel: Option<i128>) -> Result<()> {
    let options = InteractiveOptions {
        width: ctx.width,
        sentinel: sentinel.unwrap_or_else(|| ctx.config.interactive.sentinel.into()),
    };
    let prompt = prompt_text(&ctx.config.interactive.prompt, options.sentinel);
    log::debug!(
        "interactive: width {}, sentinel {}",
        options.width,
        options.sentinel
    );

    let stdin = io::stdin();
    let mut out = io::stdout();
    let renderer = create_renderer(OutputFormat::from_json_flag(ctx.ui.json), ctx.ui.color);

    let summary = if ctx.ui.json {
        let summary = run_interactive(stdin.lock(), options, |event| match event {
            SessionEvent::Evaluated(evaluation) => {
                writeln!(out, "{}", renderer.render(evaluation))?;
                out.flush()
            }
            SessionEvent::Prompt | SessionEvent::Stopped(_) => Ok(()),
        })?;
        crate::ui::json::write_event(&mut out, &stopped_json(&summary))?;
        summary
    } else {
        run_interactive(stdin.lock(), options, |event| match event {
            SessionEvent::Prompt => {
                write!(out, "{}", prompt)?;
                out.flush()
            }
            SessionEvent::Evaluated(evaluation) => writeln!(out, "{}", renderer.render(evaluation)),
            SessionEvent::Stopped(StopReason::EndOfInput) => writeln!(out),
            SessionEvent::Stopped(StopReason::InvalidInput { token }) => {
                out.flush()?;
                eprintln!(
                    "{} Stopped at non-integer input '{}'",
                    paint(
                        icon(ctx.ui.unicode, icons::WARNING, icons_ascii::WARNING),
                        colors::WARNING,
                        ctx.ui.color
                    ),
                    token
                );
                Ok(())
            }
            SessionEvent::Stopped(StopReason::Sentinel) => Ok(()),
        })?
    };

    log::info!(
        "interactive session ended ({}): {} evaluated, {} failed",
        summary.stop.name(),
        summary.evaluated,
        summary.failed
    );

    Ok(())
}

/// The stock prompt names the sentinel, so keep it truthful when the
/// sentinel is changed without also changing the prompt.
fn prompt_text(configured: &str, sentinel: i128) -> String {
    if configured == DEFAULT_PROMPT && sentinel != -1 {
        format!(
            "Enter a number to compute its factorial (or {} to quit): ",
            sentinel
        )
    } else {
        configured.to_string()
    }
}
