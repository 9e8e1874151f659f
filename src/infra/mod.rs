//! Infrastructure layer
//!
//! Handles all external process invocation. This module is the only
//! place where the `go` toolchain is actually executed.

pub mod toolchain;
