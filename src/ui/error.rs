use xfact::XfactError;

use crate::ui::context::UiContext;
use crate::ui::theme::{colors, icon, icons, icons_ascii, paint};

/// Render an error and its causes for the terminal
pub fn format_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    let mark = paint(
        icon(unicode, icons::ERROR, icons_ascii::ERROR),
        colors::ERROR,
        color,
    );
    let mut out = format!("{} {}\n", mark, err);

    for cause in err.chain().skip(1) {
        out.push_str(&format!(
            "  {} {}\n",
            icon(unicode, icons::ARROW, icons_ascii::ARROW),
            cause
        ));
    }

    if let Some(hint) = hint_for(err) {
        out.push_str(&format!("  {}\n", paint(hint, colors::DIM, color)));
    }

    out
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<XfactError>()? {
        XfactError::InvalidConfig { .. } => {
            Some("Fix the TOML file or pass --config to use another one.")
        }
        XfactError::ConfigNotFound { .. } => Some("Check the path given to --config."),
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let mut output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        if let Some(XfactError::Factorial(f)) = err.downcast_ref::<XfactError>() {
            output["error"] = serde_json::Value::String(f.kind().to_string());
        }
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
