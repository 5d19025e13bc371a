//! Value types shared by the core and the driver
//!
//! - [`Width`]: which fixed-width signed integer the factorial runs in
//! - [`Evaluation`]: one argument and what became of it

use serde::{Deserialize, Serialize};

use crate::error::FactorialError;
use crate::factorial::{factorial_as, largest_input};

/// Fixed-width signed integer type used for computation
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    /// 32-bit signed (12! is the largest result)
    #[default]
    #[value(name = "i32")]
    I32,
    /// 64-bit signed (20! is the largest result)
    #[value(name = "i64")]
    I64,
    /// 128-bit signed (33! is the largest result)
    #[value(name = "i128")]
    I128,
}

impl Width {
    /// Every supported width, narrowest first
    pub const ALL: [Width; 3] = [Width::I32, Width::I64, Width::I128];

    /// Name used on the command line, in config files and in JSON
    pub fn name(&self) -> &'static str {
        match self {
            Width::I32 => "i32",
            Width::I64 => "i64",
            Width::I128 => "i128",
        }
    }

    /// Parse a width name, case-insensitive
    pub fn from_name(name: &str) -> Option<Width> {
        match name.trim().to_lowercase().as_str() {
            "i32" | "32" => Some(Width::I32),
            "i64" | "64" => Some(Width::I64),
            "i128" | "128" => Some(Width::I128),
            _ => None,
        }
    }

    /// Largest representable value, widened to `i128`
    pub fn max_value(&self) -> i128 {
        match self {
            Width::I32 => i32::MAX.into(),
            Width::I64 => i64::MAX.into(),
            Width::I128 => i128::MAX,
        }
    }

    /// Computes `n!` in this width
    pub fn compute(&self, n: i128) -> Result<i128, FactorialError> {
        match self {
            Width::I32 => factorial_as::<i32>(n),
            Width::I64 => factorial_as::<i64>(n),
            Width::I128 => factorial_as::<i128>(n),
        }
    }

    /// Largest argument whose factorial fits this width
    pub fn largest_input(&self) -> i128 {
        match self {
            Width::I32 => largest_input::<i32>().into(),
            Width::I64 => largest_input::<i64>().into(),
            Width::I128 => largest_input::<i128>(),
        }
    }
}

impl std::fmt::Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single factorial request and its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub n: i128,
    pub width: Width,
    pub outcome: Result<i128, FactorialError>,
}

impl Evaluation {
    /// Evaluate `n!` in `width`
    pub fn new(n: i128, width: Width) -> Self {
        Self {
            n,
            width,
            outcome: width.compute(n),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}
