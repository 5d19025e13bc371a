//! Common test utilities for xfact CLI tests.
//!
//! - `TestEnv`: isolated project and home directories plus helpers to run
//!   the `xfact` binary inside them

#![allow(dead_code)]

pub mod env;

pub use env::*;
