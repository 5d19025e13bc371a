use anyhow::Result;
use xfact::presentation::json_number;
use xfact::Width;

use super::RunContext;
use crate::ui::theme::{colors, icon, icons, icons_ascii, paint};

pub fn cmd_limits(ctx: &RunContext) -> Result<()> {
    let rows: Vec<(Width, i128, i128)> = Width::ALL
        .iter()
        .map(|&width| {
            let n = width.largest_input();
            // largest_input is defined as the last argument that succeeds
            let value = width.compute(n).unwrap_or_default();
            (width, n, value)
        })
        .collect();

    if ctx.ui.json {
        let data: Vec<_> = rows
            .iter()
            .map(|(width, n, value)| {
                serde_json::json!({
                    "width": width.name(),
                    "largest_input": json_number(*n),
                    "factorial": json_number(*value),
                    "selected": *width == ctx.width,
                })
            })
            .collect();
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "limits",
            "data": data,
        }))?;
        return Ok(());
    }

    println!("{:<6} {:>9}  Factorial", "Width", "Largest n");
    for (width, n, value) in rows {
        let marker = if width == ctx.width {
            paint(
                icon(ctx.ui.unicode, icons::SUCCESS, icons_ascii::SUCCESS),
                colors::SUCCESS,
                ctx.ui.color,
            )
        } else {
            String::new()
        };
        let line = format!("{:<6} {:>9}  {} {}", width.name(), n, value, marker);
        println!("{}", line.trim_end());
    }

    Ok(())
}
