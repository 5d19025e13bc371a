use anyhow::Result;

use super::RunContext;

pub fn cmd_version(ctx: &RunContext) -> Result<()> {
    let config_source = ctx
        .config_source
        .as_ref()
        .map(|p| p.display().to_string());

    if ctx.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "version",
            "data": {
                "xfact": env!("CARGO_PKG_VERSION"),
                "width": ctx.width.name(),
                "config": config_source,
            }
        }))?;
        return Ok(());
    }

    println!("xfact v{}", env!("CARGO_PKG_VERSION"));
    println!("Width:  {}", ctx.width);
    println!(
        "Config: {}",
        config_source.as_deref().unwrap_or("built-in defaults")
    );
    Ok(())
}
