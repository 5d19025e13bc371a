//! Presentation Layer
//!
//! Formatting of factorial results for people (text) and for scripts
//! (NDJSON). The binary picks a renderer with [`create_renderer`] and writes
//! whatever it returns.

pub mod output;

pub use output::{
    banner, create_renderer, evaluation_json, json_number, stopped_json, EvaluationRenderer,
    JsonRenderer, OutputFormat, TextRenderer,
};
