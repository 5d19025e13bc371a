use std::path::Path;

use xfact::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::theme::{colors, icon, icons, icons_ascii, paint};

pub fn print_config_warnings(ui: &UiContext, path: &Path, warnings: &[ConfigWarning]) {
    if ui.json {
        for w in warnings {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "config_warning",
                "key": w.key,
                "file": path.display().to_string(),
                "line": w.line,
                "suggestion": w.suggestion,
            }));
        }
        return;
    }

    let mark = paint(
        icon(ui.unicode, icons::WARNING, icons_ascii::WARNING),
        colors::WARNING,
        ui.color,
    );
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("{} Unknown config key '{}' in {}:{}", mark, w.key, path.display(), line);
        } else {
            eprintln!("{} Unknown config key '{}' in {}", mark, w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            let arrow = icon(ui.unicode, icons::ARROW, icons_ascii::ARROW);
            eprintln!("   {} Did you mean '{}'?", arrow, suggestion);
        }
    }
}
