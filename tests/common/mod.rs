//! Common test utilities and helpers
//!
//! Integration tests drive the real gox binary against a stub `go`
//! script, so no Go toolchain is required. The stub understands the
//! `version`, `list`, and `build` subcommands, records every
//! invocation to a log file, and can be told to fail builds for one
//! GOOS via the `GOX_STUB_FAIL_OS` environment variable.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// The stub toolchain script
const STUB_SCRIPT: &str = r#"#!/bin/sh
if [ -n "$GOX_STUB_LOG" ]; then
    echo "$GOOS|$GOARCH|$*" >> "$GOX_STUB_LOG"
fi
case "$1" in
version)
    echo "go version ${GOX_STUB_VERSION:-go1.21.3} linux/amd64"
    ;;
list)
    shift 3
    for pkg in "$@"; do
        case "$pkg" in
        .) echo "main|$PWD" ;;
        *) echo "main|$PWD/${pkg#./}" ;;
        esac
    done
    ;;
build)
    if [ -n "$GOX_STUB_FAIL_OS" ] && [ "$GOOS" = "$GOX_STUB_FAIL_OS" ]; then
        echo "stub: cannot link for $GOOS/$GOARCH" >&2
        exit 1
    fi
    ;;
esac
exit 0
"#;

/// Test project context
///
/// Creates a temporary directory holding the stub toolchain and the
/// invocation log, and runs gox inside it.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project with a stub toolchain
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");

        let stub = dir.path().join("go-stub");
        std::fs::write(&stub, STUB_SCRIPT).expect("Failed to write stub toolchain");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to mark stub executable");
        }

        Self { dir }
    }

    /// Path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Path to the stub toolchain script
    pub fn gocmd(&self) -> PathBuf {
        self.dir.path().join("go-stub")
    }

    /// Path to the stub invocation log
    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("stub.log")
    }

    /// Run gox in the project directory with the stub toolchain
    pub fn run_gox(&self, args: &[&str]) -> Output {
        self.gox_command(args)
            .output()
            .expect("Failed to execute gox")
    }

    /// Build the gox command without running it, for tests that need
    /// extra environment variables
    pub fn gox_command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_gox"));
        cmd.current_dir(self.path());
        cmd.env("GOX_STUB_LOG", self.log_path());
        cmd.arg("--gocmd");
        cmd.arg(self.gocmd());
        for arg in args {
            cmd.arg(arg);
        }
        cmd
    }

    /// All `go build` invocations recorded by the stub, as
    /// `GOOS|GOARCH|args` lines
    pub fn build_log(&self) -> Vec<String> {
        let Ok(content) = std::fs::read_to_string(self.log_path()) else {
            return Vec::new();
        };
        content
            .lines()
            .filter(|line| line.split('|').nth(2).is_some_and(|a| a.starts_with("build")))
            .map(ToString::to_string)
            .collect()
    }
}

/// Decode captured stdout as UTF-8
pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Decode captured stderr as UTF-8
pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
