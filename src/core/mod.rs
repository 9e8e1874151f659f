//! Core platform-selection and dispatch logic
//!
//! This module contains the build-planning logic for gox.
//! It invokes no external processes - those belong in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`platform`] - The (OS, Arch) target platform type
//! - [`version`] - Go toolchain version parsing and comparison
//! - [`registry`] - The universe of platforms supported per Go version
//! - [`filter`] - Filter token parsing for the os/arch/osarch flags
//! - [`selector`] - Resolution of filters against the registry universe
//! - [`overrides`] - Per-platform flag overrides from the environment
//! - [`options`] - Global and per-unit build options
//! - [`dispatch`] - Bounded-parallel dispatch and failure aggregation

pub mod dispatch;
pub mod filter;
pub mod options;
pub mod overrides;
pub mod platform;
pub mod registry;
pub mod selector;
pub mod version;
