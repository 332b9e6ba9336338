//! The `utils` module provides a collection of utility functions and common
//! definitions used across the `pophub` application.
//!
//! - `error`: the crate-level error type shared by the server and client.
//! - `logging`: tracing subscriber setup.

pub mod error;
pub mod logging;
