//! Error types for gox
//!
//! Domain-specific error types using thiserror.

use thiserror::Error;

/// Toolchain version errors
#[derive(Error, Debug, PartialEq)]
pub enum VersionError {
    /// Version string could not be parsed
    #[error("Invalid Go version '{input}': {reason}")]
    InvalidVersion { input: String, reason: String },
}

/// Platform filter parse errors
///
/// All of these are fatal at parse time, before platform selection runs.
#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    /// Empty token in a filter list
    #[error("Empty token in --{flag} list")]
    EmptyToken { flag: String },

    /// A bare negation with nothing behind it
    #[error("Negation without a value in --{flag} list")]
    BareNegation { flag: String },

    /// An os/arch pair that is not of the form "os/arch"
    #[error("Invalid os/arch pair '{token}': expected 'os/arch' or '!os/arch'")]
    MalformedPair { token: String },
}

/// External toolchain errors
#[derive(Error, Debug)]
pub enum ToolchainError {
    /// The build executable is not on the PATH
    #[error("'{gocmd}' executable must be on the PATH")]
    MissingToolchain { gocmd: String },

    /// `go version` failed or produced unusable output
    #[error("error reading Go version: {reason}")]
    VersionRead { reason: String },

    /// `go list` failed for the given packages
    #[error("Failed to list packages: {reason}")]
    PackageDiscovery { reason: String },

    /// Spawning the external command failed
    #[error("Failed to run '{command}': {source}")]
    Io {
        command: String,
        source: std::io::Error,
    },
}

/// Build dispatch errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// The platform filters resolved to nothing
    #[error(
        "No valid platforms to build for. If you specified a value for the \
         'os', 'arch', or 'osarch' flags, make sure you're using a valid value."
    )]
    EmptyPlatformSet,

    /// One or more compile units failed
    #[error("{count} build error(s) occurred")]
    BuildsFailed { count: usize },
}

/// Top-level gox error type
///
/// Every fatal path in [`crate::cli`] resolves to one of these before
/// it reaches `main`.
#[derive(Error, Debug)]
pub enum GoxError {
    /// Version error
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    /// Filter error
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// Toolchain error
    #[error("Toolchain error: {0}")]
    Toolchain(#[from] ToolchainError),

    /// Build error
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Generic(String),
}
