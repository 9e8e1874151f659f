//! Command-line interface module
//!
//! This module handles argument parsing and drives a build run. It
//! contains no selection or dispatch logic - that belongs in the
//! [`crate::core`] module.

pub mod output;

use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;

use crate::config::defaults;
use crate::core::dispatch::{self, CompileUnit};
use crate::core::filter::PlatformFilter;
use crate::core::options::BuildOptions;
use crate::core::platform::Platform;
use crate::core::registry::supported_platforms;
use crate::core::selector::select_platforms;
use crate::error::{BuildError, GoxError};
use crate::infra::toolchain::GoToolchain;

/// Build metadata shown by --version
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("VERGEN_GIT_SHA"),
    "\nbuilt:  ",
    env!("VERGEN_BUILD_TIMESTAMP"),
    "\nrustc:  ",
    env!("VERGEN_RUSTC_SEMVER"),
);

/// Gox - cross-compile Go applications in parallel
///
/// With no os, arch, or osarch flags, gox builds for every platform
/// supported by the detected Go version. Prefix a value with `!` to
/// negate it. The osarch flag has the highest precedence.
#[derive(Parser, Debug)]
#[command(name = "gox")]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// Space-separated list of operating systems to build for or skip
    #[arg(long, value_name = "LIST")]
    pub os: Vec<String>,

    /// Space-separated list of architectures to build for or skip
    #[arg(long, value_name = "LIST")]
    pub arch: Vec<String>,

    /// Space-separated list of os/arch pairs to build for or skip
    #[arg(long, value_name = "LIST")]
    pub osarch: Vec<String>,

    /// Additional '-ldflags' value to pass to the build
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub ldflags: String,

    /// Additional '-gcflags' value to pass to the build
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub gcflags: String,

    /// Additional '-asmflags' value to pass to the build
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub asmflags: String,

    /// Additional '-tags' value to pass to the build
    #[arg(long, default_value = "")]
    pub tags: String,

    /// Output path template with {Dir}, {OS}, and {Arch} variables
    #[arg(long, default_value = defaults::DEFAULT_OUTPUT_TEMPLATE)]
    pub output: String,

    /// Amount of parallelism, defaults to number of CPUs minus one
    #[arg(long, default_value_t = -1)]
    pub parallel: i64,

    /// Set CGO_ENABLED=1, requires a proper C toolchain
    #[arg(long)]
    pub cgo: bool,

    /// Force rebuilding of packages that are up to date
    #[arg(long)]
    pub rebuild: bool,

    /// Build command, defaults to Go
    #[arg(long, default_value = defaults::DEFAULT_GO_CMD)]
    pub gocmd: String,

    /// List supported os/arch pairs for the detected Go version
    #[arg(long = "osarch-list")]
    pub osarch_list: bool,

    /// Output the os/arch list in JSON format for scripting
    #[arg(long, requires = "osarch_list")]
    pub json: bool,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Packages to build, defaults to the current directory
    #[arg(value_name = "PACKAGES")]
    pub packages: Vec<String>,
}

impl Cli {
    /// Execute a build run
    pub async fn run(self) -> Result<(), GoxError> {
        let toolchain = GoToolchain::new(&self.gocmd);
        toolchain.locate()?;

        let go_version = toolchain.version().await?;
        tracing::info!("detected toolchain version {go_version}");

        let universe = supported_platforms(&go_version);

        if self.osarch_list {
            print_osarch_list(&universe, self.json)?;
            return Ok(());
        }

        let filter = PlatformFilter::parse(&self.os, &self.arch, &self.osarch)?;
        let platforms = select_platforms(&filter, &universe);
        if platforms.is_empty() {
            return Err(BuildError::EmptyPlatformSet.into());
        }

        let packages = if self.packages.is_empty() {
            vec![".".to_string()]
        } else {
            self.packages.clone()
        };
        let package_dirs = toolchain.main_package_dirs(&packages).await?;
        if package_dirs.is_empty() {
            return Err(GoxError::Generic(format!(
                "no buildable main packages found in {packages:?}"
            )));
        }

        let options = BuildOptions {
            ldflags: self.ldflags.clone(),
            gcflags: self.gcflags.clone(),
            asmflags: self.asmflags.clone(),
            tags: self.tags.clone(),
            output_template: self.output.clone(),
            cgo: self.cgo,
            rebuild: self.rebuild,
        };
        let units = dispatch::compile_units(&package_dirs, &platforms, &options);

        let parallelism = dispatch::default_parallelism(self.parallel);
        println!("Number of parallel builds: {parallelism}\n");

        let cancel = cancel_on_interrupt();
        let bar = output::create_build_bar(units.len() as u64);
        let toolchain = Arc::new(toolchain);

        let compile = {
            let bar = bar.clone();
            move |unit: CompileUnit| {
                let toolchain = Arc::clone(&toolchain);
                let bar = bar.clone();
                async move {
                    output::print_unit_start(&bar, &unit.platform, &unit.package);
                    let result = toolchain.compile(&unit).await;
                    bar.inc(1);
                    result
                }
            }
        };

        let failures = dispatch::run_builds(units, parallelism, cancel, compile).await;
        bar.finish_and_clear();

        if failures.is_empty() {
            println!("{} all builds succeeded", output::status::SUCCESS);
            Ok(())
        } else {
            output::print_failure_report(&failures);
            Err(BuildError::BuildsFailed {
                count: failures.len(),
            }
            .into())
        }
    }
}

/// Cancel queued builds on Ctrl-C; in-flight builds finish first.
fn cancel_on_interrupt() -> CancellationToken {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, waiting for in-flight builds to finish");
            trigger.cancel();
        }
    });
    cancel
}

fn print_osarch_list(universe: &[Platform], json: bool) -> Result<(), GoxError> {
    if json {
        println!("{}", serde_json::to_string_pretty(universe)?);
    } else {
        for platform in universe {
            println!("{platform}");
        }
    }
    Ok(())
}
