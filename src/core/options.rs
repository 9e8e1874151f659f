//! Build options
//!
//! [`BuildOptions`] holds the global flag values shared by a whole run;
//! [`ResolvedOptions`] is the per-platform copy with environment
//! overrides applied, owned by a single compile unit.

use crate::config::defaults::DEFAULT_OUTPUT_TEMPLATE;
use crate::core::overrides::{self, FlagCategory};
use crate::core::platform::Platform;

/// Global build parameters for one run
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Linker flags (`-ldflags`)
    pub ldflags: String,
    /// Compiler flags (`-gcflags`)
    pub gcflags: String,
    /// Assembler flags (`-asmflags`)
    pub asmflags: String,
    /// Build tags (`-tags`)
    pub tags: String,
    /// Output path template
    pub output_template: String,
    /// Enable cgo (CGO_ENABLED=1)
    pub cgo: bool,
    /// Force rebuilding of up-to-date packages (`-a`)
    pub rebuild: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            ldflags: String::new(),
            gcflags: String::new(),
            asmflags: String::new(),
            tags: String::new(),
            output_template: DEFAULT_OUTPUT_TEMPLATE.to_string(),
            cgo: false,
            rebuild: false,
        }
    }
}

/// Per-unit build parameters after platform overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Effective linker flags
    pub ldflags: String,
    /// Effective compiler flags
    pub gcflags: String,
    /// Effective assembler flags
    pub asmflags: String,
    /// Build tags
    pub tags: String,
    /// Output path template
    pub output_template: String,
    /// Enable cgo
    pub cgo: bool,
    /// Force rebuild
    pub rebuild: bool,
}

impl BuildOptions {
    /// Apply the per-platform environment overrides for `platform`.
    pub fn resolve_for(&self, platform: &Platform) -> ResolvedOptions {
        ResolvedOptions {
            ldflags: overrides::resolve(FlagCategory::Ldflags, platform, &self.ldflags),
            gcflags: overrides::resolve(FlagCategory::Gcflags, platform, &self.gcflags),
            asmflags: overrides::resolve(FlagCategory::Asmflags, platform, &self.asmflags),
            tags: self.tags.clone(),
            output_template: self.output_template.clone(),
            cgo: self.cgo,
            rebuild: self.rebuild,
        }
    }
}

/// Render an output path template for one compile unit.
///
/// Recognized variables: `{Dir}` (package directory base name),
/// `{OS}`, and `{Arch}`.
pub fn render_output_path(template: &str, dir: &str, platform: &Platform) -> String {
    template
        .replace("{Dir}", dir)
        .replace("{OS}", &platform.os)
        .replace("{Arch}", &platform.arch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_default_template() {
        let path = render_output_path(
            DEFAULT_OUTPUT_TEMPLATE,
            "app",
            &Platform::new("windows", "386"),
        );
        assert_eq!(path, "app_windows_386");
    }

    #[test]
    fn renders_custom_template_with_subdirectories() {
        let path = render_output_path(
            "dist/{OS}/{Arch}/{Dir}",
            "tool",
            &Platform::new("linux", "arm64"),
        );
        assert_eq!(path, "dist/linux/arm64/tool");
    }

    #[test]
    fn unknown_variables_pass_through() {
        let path = render_output_path("{Dir}-{Version}", "app", &Platform::new("linux", "amd64"));
        assert_eq!(path, "app-{Version}");
    }

    #[test]
    fn resolve_for_copies_globals_without_overrides() {
        let options = BuildOptions {
            ldflags: "-s".to_string(),
            tags: "netgo".to_string(),
            ..BuildOptions::default()
        };
        // no GOX_PLAN9_386_* variables are set in any sane environment
        let resolved = options.resolve_for(&Platform::new("plan9", "386"));
        assert_eq!(resolved.ldflags, "-s");
        assert_eq!(resolved.tags, "netgo");
        assert_eq!(resolved.output_template, DEFAULT_OUTPUT_TEMPLATE);
        assert!(!resolved.cgo);
    }
}
