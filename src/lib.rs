//! xfact - fixed-width factorial calculator
//!
//! The core is [`factorial::factorial`], a pure function that multiplies
//! `1..=n` in a fixed-width signed integer type and reports negative input
//! or overflow as typed errors instead of wrapping. Everything else in this
//! crate is driver plumbing: configuration, the demo/interactive session,
//! and output rendering.

pub mod config;
pub mod error;
pub mod factorial;
pub mod models;
pub mod presentation;
pub mod session;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, LoadedConfig};
pub use error::{FactorialError, XfactError, XfactResult};
pub use factorial::{compute, factorial, largest_input, FixedWidth};
pub use models::{Evaluation, Width};
pub use session::{
    run_demo, run_interactive, InteractiveOptions, SessionEvent, SessionSummary, StopReason,
    Tokens,
};
