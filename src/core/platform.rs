//! Target platform type
//!
//! A platform is one (operating system, architecture) pair the Go
//! toolchain can produce binaries for, e.g. `linux/amd64`.

use std::fmt;

use serde::Serialize;

use crate::error::FilterError;

/// One (OS, Arch) cross-compilation target
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Platform {
    /// Target operating system (GOOS value)
    pub os: String,
    /// Target architecture (GOARCH value)
    pub arch: String,
}

impl Platform {
    /// Create a platform from its two components
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Parse a canonical `"os/arch"` pair string
    pub fn parse(token: &str) -> Result<Self, FilterError> {
        match token.split_once('/') {
            Some((os, arch)) if !os.is_empty() && !arch.is_empty() && !arch.contains('/') => {
                Ok(Self::new(os, arch))
            }
            _ => Err(FilterError::MalformedPair {
                token: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}
