//! Per-platform flag overrides
//!
//! Build flags can be overridden per platform through environment
//! variables of the form `GOX_<OS>_<ARCH>_<CATEGORY>`, e.g.
//! `GOX_LINUX_AMD64_LDFLAGS`. An override is appended to the global
//! flag value, so global flags always apply before platform-specific
//! ones.

use crate::config::defaults::ENV_OVERRIDE_PREFIX;
use crate::core::platform::Platform;

/// Flag categories that can be overridden per platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagCategory {
    /// Compiler flags (`-gcflags`)
    Gcflags,
    /// Linker flags (`-ldflags`)
    Ldflags,
    /// Assembler flags (`-asmflags`)
    Asmflags,
}

impl FlagCategory {
    /// Environment variable suffix for this category
    pub fn env_suffix(self) -> &'static str {
        match self {
            Self::Gcflags => "GCFLAGS",
            Self::Ldflags => "LDFLAGS",
            Self::Asmflags => "ASMFLAGS",
        }
    }
}

/// Environment variable name consulted for one (platform, category)
pub fn override_var(platform: &Platform, category: FlagCategory) -> String {
    format!(
        "{ENV_OVERRIDE_PREFIX}_{}_{}_{}",
        platform.os.to_uppercase(),
        platform.arch.to_uppercase(),
        category.env_suffix()
    )
}

/// Resolve the effective flag value from the process environment.
pub fn resolve(category: FlagCategory, platform: &Platform, global: &str) -> String {
    resolve_with(category, platform, global, |name| std::env::var(name).ok())
}

/// Resolve the effective flag value with an injectable lookup.
///
/// Returns `global` unchanged when no override is set, otherwise the
/// override space-joined after the global value. The global value is
/// never mutated.
pub fn resolve_with(
    category: FlagCategory,
    platform: &Platform,
    global: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> String {
    match lookup(&override_var(platform, category)) {
        Some(value) if !value.is_empty() => {
            if global.is_empty() {
                value
            } else {
                format!("{global} {value}")
            }
        }
        _ => global.to_string(),
    }
}
