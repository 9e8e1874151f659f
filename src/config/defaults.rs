//! Default configuration values

/// Default output path template
pub const DEFAULT_OUTPUT_TEMPLATE: &str = "{Dir}_{OS}_{Arch}";

/// Default build command
pub const DEFAULT_GO_CMD: &str = "go";

/// Prefix for per-platform flag override environment variables
pub const ENV_OVERRIDE_PREFIX: &str = "GOX";

/// Parallelism cap on Solaris-derived hosts
///
/// Joyent containers report 48 cores, and a default of 47 parallel
/// builds exhausts process limits there. Pin to a small fixed value
/// unless the user overrides it with --parallel.
pub const SOLARIS_PARALLEL_JOBS: usize = 3;

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
