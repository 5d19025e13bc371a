use std::io::{self, Write};

use anyhow::Result;
use xfact::presentation::{create_renderer, OutputFormat};
use xfact::{Evaluation, XfactError};

use super::RunContext;

pub fn cmd_compute(ctx: &RunContext, numbers: &[i128]) -> Result<()> {
    let evaluations: Vec<Evaluation> = numbers
        .iter()
        .map(|&n| Evaluation::new(n, ctx.width))
        .collect();
    let failed = evaluations.iter().filter(|e| !e.is_success()).count();

    let renderer = create_renderer(OutputFormat::from_json_flag(ctx.ui.json), ctx.ui.color);
    let mut out = io::stdout().lock();
    for evaluation in &evaluations {
        writeln!(out, "{}", renderer.render(evaluation))?;
    }

    if ctx.ui.json {
        crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "compute",
                "evaluated": evaluations.len(),
                "failed": failed,
            }),
        )?;
    }
    out.flush()?;

    match evaluations.iter().find_map(|e| e.outcome.err()) {
        Some(first) => Err(anyhow::Error::new(XfactError::Factorial(first)).context(format!(
            "{} of {} arguments failed",
            failed,
            evaluations.len()
        ))),
        None => Ok(()),
    }
}
