//! Error types for xfact
//!
//! Uses `thiserror` for library errors. The factorial core only ever
//! produces [`FactorialError`]; [`XfactError`] covers the driver.

use std::path::PathBuf;
use thiserror::Error;

use crate::models::Width;

/// Result type alias for xfact driver operations
pub type XfactResult<T> = Result<T, XfactError>;

/// Why a factorial could not be computed.
///
/// Arguments are carried as `i128` so one error type serves every width.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorialError {
    /// Factorial is undefined below zero
    #[error("factorial not defined for negative numbers (n = {n})")]
    NegativeInput { n: i128 },

    /// The product does not fit the chosen width
    #[error("factorial of {n} overflows {width}")]
    Overflow { n: i128, width: Width },
}

impl FactorialError {
    /// Stable machine-readable name, used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            FactorialError::NegativeInput { .. } => "negative_input",
            FactorialError::Overflow { .. } => "overflow",
        }
    }

    /// The argument that was rejected
    pub fn input(&self) -> i128 {
        match self {
            FactorialError::NegativeInput { n } | FactorialError::Overflow { n, .. } => *n,
        }
    }
}

/// Main error type for the xfact driver
#[derive(Error, Debug)]
pub enum XfactError {
    /// A factorial failed where the caller treats that as fatal
    #[error(transparent)]
    Factorial(#[from] FactorialError),

    /// IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Config file exists but is not valid TOML for our schema
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A config path given explicitly does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },
}
