//! VirtualBox disk compaction tool
//!
//! Enumerates every virtual disk known to VirtualBox via
//! `VBoxManage list hdds`, compacts the ones stored in VDI format via
//! `VBoxManage modifymedium --compact`, and reports how much space each
//! image reclaimed.
//!
//! The pipeline is strictly sequential: one disk at a time, which also keeps
//! clear of VirtualBox's own locking on disk image files.

pub mod compact;
pub mod config;
pub mod disks;
pub mod error;
pub mod manager;

pub use compact::{compact_all, CompactSummary};
pub use config::CompactConfig;
pub use disks::DiskRecord;
pub use error::CompactError;
pub use manager::VboxManage;
