//! pip package upgrade tool
//!
//! Lists outdated packages via `pip list --outdated --format=json`, shows
//! them, asks for confirmation, and upgrades them via `pip install -U`.
//!
//! On Windows the Python launcher (`py`) selects which interpreter's pip to
//! drive, including an optional `-X.Y` version selector; everywhere else
//! `python3 -m pip` is used and the selector is a no-op.

pub mod config;
pub mod confirm;
pub mod error;
pub mod outdated;
pub mod pip;
pub mod upgrade;
pub mod versions;

pub use config::UpdateConfig;
pub use confirm::{confirm_upgrade, LineReader, StdinReader};
pub use error::UpdateError;
pub use outdated::outdated_packages;
pub use pip::Pip;
pub use upgrade::upgrade_packages;
