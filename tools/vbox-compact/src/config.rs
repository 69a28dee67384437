//! Tool configuration, resolved once at process start
//!
//! All ambient lookups (home directory, VBoxManage location) happen here so
//! the pipeline itself only ever sees explicit values.

use std::path::PathBuf;

use crate::error::{CompactError, CompactResult};

/// Environment variable overriding the VBoxManage location
pub const MANAGER_ENV: &str = "VBOXMANAGE";

/// Disk storage format eligible for compaction
pub const TARGET_FORMAT: &str = "VDI";

/// Resolved configuration for a compaction run
#[derive(Debug, Clone)]
pub struct CompactConfig {
    /// Path to the VBoxManage executable
    pub manager: PathBuf,
    /// Default VirtualBox machine folder under the user's home directory
    pub vm_root: PathBuf,
    /// Storage format eligible for compaction
    pub target_format: String,
}

impl CompactConfig {
    /// Resolve configuration from the environment
    ///
    /// # Errors
    ///
    /// Fails with [`CompactError::HomeNotSet`] when the home directory
    /// cannot be determined.
    pub fn from_env() -> CompactResult<Self> {
        let home = dirs::home_dir().ok_or(CompactError::HomeNotSet)?;

        let manager = std::env::var_os(MANAGER_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_manager_path);

        Ok(Self {
            manager,
            vm_root: home.join("VirtualBox VMs"),
            target_format: TARGET_FORMAT.to_string(),
        })
    }
}

/// Fixed installation path on Windows, PATH lookup elsewhere
fn default_manager_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("C:/Program Files/Oracle/VirtualBox/VBoxManage.exe")
    } else {
        PathBuf::from("VBoxManage")
    }
}
