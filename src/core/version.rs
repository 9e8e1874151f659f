//! Go toolchain version parsing
//!
//! Accepts the forms the toolchain actually produces: bare versions
//! like `1.21`, tagged versions like `go1.21.3`, and full
//! `go version go1.21.3 linux/amd64` output lines.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::VersionError;

/// Pattern matching a `goX.Y` or `goX.Y.Z` version, with optional prefix
const VERSION_PATTERN: &str = r"(?:go)?(\d+)\.(\d+)(?:\.(\d+))?";

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(VERSION_PATTERN).expect("valid version pattern"))
}

/// A parsed Go toolchain version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GoVersion {
    /// Major version (1 for every released Go toolchain)
    pub major: u32,
    /// Minor version
    pub minor: u32,
    /// Patch version, 0 when absent
    pub patch: u32,
}

impl GoVersion {
    /// Create a version from its components
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The (major, minor) release pair, ignoring the patch level
    pub const fn release(&self) -> (u32, u32) {
        (self.major, self.minor)
    }

    /// Parse a version out of a toolchain version string
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let captures = version_pattern()
            .captures(input)
            .ok_or_else(|| VersionError::InvalidVersion {
                input: input.to_string(),
                reason: "no goX.Y version found".to_string(),
            })?;

        let component = |idx: usize| -> Result<u32, VersionError> {
            captures
                .get(idx)
                .map_or(Ok(0), |m| {
                    m.as_str()
                        .parse()
                        .map_err(|e: std::num::ParseIntError| e.to_string())
                })
                .map_err(|reason| VersionError::InvalidVersion {
                    input: input.to_string(),
                    reason,
                })
        };

        Ok(Self::new(component(1)?, component(2)?, component(3)?))
    }
}

impl fmt::Display for GoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.patch == 0 {
            write!(f, "go{}.{}", self.major, self.minor)
        } else {
            write!(f, "go{}.{}.{}", self.major, self.minor, self.patch)
        }
    }
}
