//! Common utilities for host maintenance tools
//!
//! This crate provides the infrastructure shared by the `tools/` binaries:
//!
//! - [`CommandRunner`] / [`ProcessRunner`]: executing external programs as
//!   argument vectors (never through a shell), with or without output capture
//! - [`init_tracing`]: standardized logging setup to stderr
//! - [`testing`]: a recording fake runner for deterministic tests

pub mod init;
pub mod runner;
pub mod testing;

pub use init::init_tracing;
pub use runner::{CommandError, CommandRunner, ProcessRunner};
