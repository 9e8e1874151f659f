//! Gox - parallel Go cross-compilation
//!
//! This library provides the core functionality for cross-compiling Go
//! packages for many platforms at once, bounding build parallelism and
//! aggregating per-platform failures.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Platform selection and dispatch logic (no I/O operations)
//! - [`infra`] - Infrastructure layer (external `go` toolchain processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
