//! Output Rendering
//!
//! Turns evaluations and session summaries into text lines or NDJSON
//! objects. Renderers return strings; writing them is the caller's job.

use crossterm::style::{style, Color, Stylize};
use serde_json::Value;

use crate::models::Evaluation;
use crate::session::{SessionSummary, StopReason};

/// Title printed before the demonstration sequence
pub const BANNER_TITLE: &str = "Factorial Test Program";
/// Underline printed below [`BANNER_TITLE`]
pub const BANNER_RULE: &str = "=====================";

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Trait for rendering a single evaluation
pub trait EvaluationRenderer {
    /// Render one evaluation as a single line (no trailing newline)
    fn render(&self, evaluation: &Evaluation) -> String;
}

/// Text renderer: `factorial(n) = value`
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
}

impl TextRenderer {
    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl EvaluationRenderer for TextRenderer {
    fn render(&self, evaluation: &Evaluation) -> String {
        match &evaluation.outcome {
            Ok(value) => format!("factorial({}) = {}", evaluation.n, value),
            Err(err) => format!(
                "factorial({}) = {} {}",
                evaluation.n,
                self.paint("error:", Color::Red),
                err
            ),
        }
    }
}

/// JSON renderer for evaluations
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl EvaluationRenderer for JsonRenderer {
    fn render(&self, evaluation: &Evaluation) -> String {
        evaluation_json(evaluation).to_string()
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, color: bool) -> Box<dyn EvaluationRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { color }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Banner shown before the demonstration sequence
pub fn banner() -> String {
    format!("{}\n{}\n", BANNER_TITLE, BANNER_RULE)
}

/// JSON number when it fits `i64`/`u64`, decimal string otherwise
pub fn json_number(value: i128) -> Value {
    if let Ok(v) = i64::try_from(value) {
        Value::from(v)
    } else if let Ok(v) = u64::try_from(value) {
        Value::from(v)
    } else {
        Value::String(value.to_string())
    }
}

/// NDJSON object for one evaluation
pub fn evaluation_json(evaluation: &Evaluation) -> Value {
    match &evaluation.outcome {
        Ok(value) => serde_json::json!({
            "event": "evaluated",
            "n": json_number(evaluation.n),
            "width": evaluation.width.name(),
            "status": "ok",
            "value": json_number(*value),
        }),
        Err(err) => serde_json::json!({
            "event": "evaluated",
            "n": json_number(evaluation.n),
            "width": evaluation.width.name(),
            "status": "error",
            "error": err.kind(),
            "message": err.to_string(),
        }),
    }
}

/// NDJSON object for the end of an interactive session
pub fn stopped_json(summary: &SessionSummary) -> Value {
    let mut event = serde_json::json!({
        "event": "stopped",
        "reason": summary.stop.name(),
        "evaluated": summary.evaluated,
        "succeeded": summary.succeeded,
        "failed": summary.failed,
    });
    if let StopReason::InvalidInput { token } = &summary.stop {
        event["token"] = Value::String(token.clone());
    }
    event
}
