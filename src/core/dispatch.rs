//! Bounded-parallel build dispatch
//!
//! Builds the cross product of packages and platforms, runs the
//! compile units under a concurrency cap, and aggregates failures.
//! One failing unit never aborts its siblings; all failures are
//! collected and reported together after every unit has finished.

use std::future::Future;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use crate::config::defaults::SOLARIS_PARALLEL_JOBS;
use crate::core::options::{BuildOptions, ResolvedOptions};
use crate::core::platform::Platform;

/// One scheduled (package, platform) build job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileUnit {
    /// Package directory to build
    pub package: PathBuf,
    /// Target platform
    pub platform: Platform,
    /// Build parameters with platform overrides applied
    pub options: ResolvedOptions,
}

/// One recorded build failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    /// Platform whose build failed
    pub platform: Platform,
    /// Underlying compiler message
    pub message: String,
}

/// Build the full cross product of packages and platforms.
///
/// Platform overrides are resolved once per platform and shared by
/// every package built for it.
pub fn compile_units(
    packages: &[PathBuf],
    platforms: &[Platform],
    options: &BuildOptions,
) -> Vec<CompileUnit> {
    let mut units = Vec::with_capacity(packages.len() * platforms.len());
    for platform in platforms {
        let resolved = options.resolve_for(platform);
        for package in packages {
            units.push(CompileUnit {
                package: package.clone(),
                platform: platform.clone(),
                options: resolved.clone(),
            });
        }
    }
    units
}

/// Resolve the effective parallelism for a run.
///
/// A requested value above zero wins. Otherwise default to one less
/// than the core count, with a floor of one. Solaris-derived hosts are
/// pinned to a small fixed value because containers there misreport
/// their core count.
pub fn resolve_parallelism(requested: i64, cpus: usize, host_os: &str) -> usize {
    if requested > 0 {
        // Semaphore::new panics above MAX_PERMITS
        return usize::try_from(requested)
            .unwrap_or(usize::MAX)
            .min(Semaphore::MAX_PERMITS);
    }
    if host_os == "solaris" || host_os == "illumos" {
        return SOLARIS_PARALLEL_JOBS;
    }
    if cpus < 2 {
        1
    } else {
        cpus - 1
    }
}

/// [`resolve_parallelism`] against the detected host environment.
pub fn default_parallelism(requested: i64) -> usize {
    resolve_parallelism(requested, num_cpus::get(), std::env::consts::OS)
}

/// Run all compile units with at most `parallelism` in flight.
///
/// `compile` is invoked once per unit; an `Err` is recorded as an
/// [`ErrorRecord`] without affecting other units. When `cancel` fires,
/// queued units are skipped but in-flight builds run to completion.
/// Returns after every unit has finished or been skipped.
pub async fn run_builds<C, F>(
    units: Vec<CompileUnit>,
    parallelism: usize,
    cancel: CancellationToken,
    compile: C,
) -> Vec<ErrorRecord>
where
    C: Fn(CompileUnit) -> F + Clone + Send + Sync + 'static,
    F: Future<Output = Result<(), String>> + Send + 'static,
{
    let semaphore = Arc::new(Semaphore::new(parallelism.max(1)));
    let failures = Arc::new(Mutex::new(Vec::new()));

    let mut handles = Vec::with_capacity(units.len());
    for unit in units {
        let semaphore = Arc::clone(&semaphore);
        let failures = Arc::clone(&failures);
        let cancel = cancel.clone();
        let compile = compile.clone();
        let platform = unit.platform.clone();

        let handle = tokio::spawn(async move {
            // the permit bounds in-flight builds; released on every path
            let _permit = semaphore.acquire_owned().await.unwrap();
            if cancel.is_cancelled() {
                tracing::debug!(
                    "skipping {} for {} (cancelled)",
                    unit.package.display(),
                    unit.platform
                );
                return;
            }

            let platform = unit.platform.clone();
            if let Err(message) = compile(unit).await {
                failures
                    .lock()
                    .unwrap()
                    .push(ErrorRecord { platform, message });
            }
        });
        handles.push((platform, handle));
    }

    // barrier: nothing is reported until every unit is done
    for (platform, handle) in handles {
        if let Err(e) = handle.await {
            failures.lock().unwrap().push(ErrorRecord {
                platform,
                message: format!("build task failed: {e}"),
            });
        }
    }

    let mut guard = failures.lock().unwrap();
    std::mem::take(&mut *guard)
}
