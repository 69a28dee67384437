//! Thin wrapper around the VBoxManage executable
//!
//! One method per subcommand the tool uses. The runner is injected so tests
//! can substitute a recording fake.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cmd_common::runner::{args, CommandResult, CommandRunner};

/// Handle to a VBoxManage installation
pub struct VboxManage {
    runner: Arc<dyn CommandRunner>,
    program: PathBuf,
}

impl VboxManage {
    pub fn new(runner: Arc<dyn CommandRunner>, program: PathBuf) -> Self {
        Self { runner, program }
    }

    /// List all hard disks known to VirtualBox
    ///
    /// Returns the raw colon-delimited, blank-line-separated text that
    /// [`crate::disks::parse_disk_list`] understands.
    pub async fn list_hdds(&self) -> CommandResult<String> {
        self.runner
            .run_capturing(&self.program, &args(["list", "hdds"]))
            .await
    }

    /// Compact a single disk image in place
    ///
    /// VBoxManage's own output streams to the console. Fails if the disk is
    /// locked, busy, or not in a compactable format.
    pub async fn compact_medium(&self, location: &Path) -> CommandResult<()> {
        let invocation = vec![
            "modifymedium".to_string(),
            "--compact".to_string(),
            location.to_string_lossy().into_owned(),
        ];
        self.runner.run(&self.program, &invocation).await
    }
}
