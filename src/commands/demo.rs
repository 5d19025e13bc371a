use std::io::{self, Write};

use anyhow::Result;
use xfact::presentation::{banner, create_renderer, OutputFormat};

use super::RunContext;

pub fn cmd_demo(ctx: &RunContext, inputs: Option<Vec<i128>>) -> Result<()> {
    let inputs = inputs.unwrap_or_else(|| ctx.config.demo_inputs());
    log::info!("demo: {} inputs, width {}", inputs.len(), ctx.width);

    let evaluations = xfact::run_demo(&inputs, ctx.width);
    let renderer = create_renderer(OutputFormat::from_json_flag(ctx.ui.json), ctx.ui.color);
    let mut out = io::stdout().lock();

    if ctx.ui.json {
        crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "start",
                "command": "demo",
                "width": ctx.width.name(),
            }),
        )?;
    } else {
        writeln!(out, "{}", banner())?;
    }

    for evaluation in &evaluations {
        writeln!(out, "{}", renderer.render(evaluation))?;
    }

    if ctx.ui.json {
        let failed = evaluations.iter().filter(|e| !e.is_success()).count();
        crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "demo",
                "evaluated": evaluations.len(),
                "failed": failed,
            }),
        )?;
    }
    out.flush()?;

    Ok(())
}
