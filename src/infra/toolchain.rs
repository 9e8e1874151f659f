//! Go toolchain invocation
//!
//! Wraps the external `go` command: locating it, reading its version,
//! discovering buildable main packages, and running one cross-compile.
//! Everything here treats the toolchain as a black box that either
//! succeeds or fails with a message.

use std::path::{Path, PathBuf};
use std::process::Output;

use tokio::process::Command;

use crate::core::dispatch::CompileUnit;
use crate::core::options::render_output_path;
use crate::core::version::GoVersion;
use crate::error::ToolchainError;

/// Wrapper around the external Go build command
#[derive(Debug, Clone)]
pub struct GoToolchain {
    gocmd: String,
}

impl GoToolchain {
    /// Create a toolchain wrapper for the given command name
    pub fn new(gocmd: impl Into<String>) -> Self {
        Self {
            gocmd: gocmd.into(),
        }
    }

    /// Check that the build executable exists on the PATH.
    pub fn locate(&self) -> Result<PathBuf, ToolchainError> {
        which::which(&self.gocmd).map_err(|_| ToolchainError::MissingToolchain {
            gocmd: self.gocmd.clone(),
        })
    }

    /// Read and parse the toolchain version from `go version`.
    pub async fn version(&self) -> Result<GoVersion, ToolchainError> {
        let output = self.run(&["version"]).await?;
        if !output.status.success() {
            return Err(ToolchainError::VersionRead {
                reason: stderr_text(&output),
            });
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        GoVersion::parse(stdout.trim()).map_err(|e| ToolchainError::VersionRead {
            reason: e.to_string(),
        })
    }

    /// Discover the main-package directories for the given package paths.
    ///
    /// Only packages named `main` produce binaries, so everything else
    /// is skipped.
    pub async fn main_package_dirs(
        &self,
        packages: &[String],
    ) -> Result<Vec<PathBuf>, ToolchainError> {
        let mut args = vec!["list", "-f", "{{.Name}}|{{.Dir}}"];
        args.extend(packages.iter().map(String::as_str));

        let output = self.run(&args).await?;
        if !output.status.success() {
            return Err(ToolchainError::PackageDiscovery {
                reason: stderr_text(&output),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut dirs: Vec<PathBuf> = Vec::new();
        for line in stdout.lines() {
            let Some((name, dir)) = line.trim().split_once('|') else {
                continue;
            };
            if name != "main" {
                tracing::debug!("skipping non-main package in {dir}");
                continue;
            }
            if !dirs.iter().any(|d| d == Path::new(dir)) {
                dirs.push(PathBuf::from(dir));
            }
        }
        Ok(dirs)
    }

    /// Cross-compile one unit.
    ///
    /// Returns the compiler's message on failure so the dispatcher can
    /// record it without aborting sibling units.
    pub async fn compile(&self, unit: &CompileUnit) -> Result<(), String> {
        let output_path = output_path_for(unit);
        let args = build_args(unit, &output_path);
        tracing::debug!("{} {}", self.gocmd, args.join(" "));

        let output = Command::new(&self.gocmd)
            .args(&args)
            .env("GOOS", &unit.platform.os)
            .env("GOARCH", &unit.platform.arch)
            .env("CGO_ENABLED", if unit.options.cgo { "1" } else { "0" })
            .output()
            .await
            .map_err(|e| format!("failed to run {}: {e}", self.gocmd))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(compile_message(&output))
        }
    }

    async fn run(&self, args: &[&str]) -> Result<Output, ToolchainError> {
        Command::new(&self.gocmd)
            .args(args)
            .output()
            .await
            .map_err(|e| ToolchainError::Io {
                command: format!("{} {}", self.gocmd, args.join(" ")),
                source: e,
            })
    }
}

/// Render the output path for one unit, with the Windows .exe suffix.
fn output_path_for(unit: &CompileUnit) -> String {
    let dir = unit
        .package
        .file_name()
        .map_or_else(|| "output".to_string(), |n| n.to_string_lossy().into_owned());
    let mut path = render_output_path(&unit.options.output_template, &dir, &unit.platform);
    if unit.platform.os == "windows" && !path.ends_with(".exe") {
        path.push_str(".exe");
    }
    path
}

/// Assemble the `go build` argument list for one unit.
fn build_args(unit: &CompileUnit, output_path: &str) -> Vec<String> {
    let mut args = vec![
        "build".to_string(),
        "-o".to_string(),
        output_path.to_string(),
    ];
    if unit.options.rebuild {
        args.push("-a".to_string());
    }
    for (flag, value) in [
        ("-ldflags", &unit.options.ldflags),
        ("-gcflags", &unit.options.gcflags),
        ("-asmflags", &unit.options.asmflags),
        ("-tags", &unit.options.tags),
    ] {
        if !value.is_empty() {
            args.push(flag.to_string());
            args.push(value.clone());
        }
    }
    args.push(unit.package.display().to_string());
    args
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

/// Collapse a failed build's output into one message.
fn compile_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut message = stderr.trim().to_string();
    if message.is_empty() {
        message = stdout.trim().to_string();
    }
    if message.is_empty() {
        message = format!("exit status {}", output.status.code().unwrap_or(-1));
    }
    message
}
