//! Pipeline tests for the compaction batch
//!
//! These drive `compact_all` against a recording fake runner and real
//! temporary files, so no VirtualBox installation is needed.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use cmd_common::runner::CommandError;
use cmd_common::testing::{CaptureMode, RecordingRunner};
use vbox_compact::{compact_all, CompactConfig, VboxManage};

fn test_config() -> CompactConfig {
    CompactConfig {
        manager: PathBuf::from("VBoxManage"),
        vm_root: PathBuf::from("/tmp/vms"),
        target_format: "VDI".to_string(),
    }
}

/// Create a disk image file of the given size and return its path
fn fake_disk(dir: &TempDir, name: &str, bytes: usize) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&vec![0u8; bytes]).unwrap();
    path
}

fn listing_for(disks: &[(&PathBuf, &str)]) -> String {
    disks
        .iter()
        .map(|(path, format)| {
            format!(
                "UUID:           00000000-0000-0000-0000-000000000000\n\
                 State:          created\n\
                 Location:       {}\n\
                 Storage format: {}\n\
                 Capacity:       1024 MBytes\n",
                path.display(),
                format
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn one_vdi_one_skip_single_compaction_in_order() {
    let dir = TempDir::new().unwrap();
    let vdi = fake_disk(&dir, "dev.vdi", 2048);
    let vmdk = fake_disk(&dir, "imported.vmdk", 1024);

    let runner = Arc::new(RecordingRunner::new());
    runner.queue_output(listing_for(&[(&vdi, "VDI"), (&vmdk, "VMDK")]));

    let manager = VboxManage::new(runner.clone(), PathBuf::from("VBoxManage"));
    let summary = compact_all(&manager, &test_config()).await.unwrap();

    assert_eq!(summary.compacted.len(), 1);
    assert_eq!(summary.compacted[0].location, vdi);
    assert_eq!(summary.compacted[0].original_bytes, 2048);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].location, vmdk);
    assert!(summary.failed.is_empty());

    // Exactly one listing call followed by exactly one compaction
    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].args, vec!["list", "hdds"]);
    assert_eq!(calls[1].mode, CaptureMode::Streamed);
    assert_eq!(
        calls[1].args,
        vec![
            "modifymedium".to_string(),
            "--compact".to_string(),
            vdi.to_string_lossy().into_owned(),
        ]
    );
}

#[tokio::test]
async fn a_failed_disk_does_not_stop_the_batch() {
    let dir = TempDir::new().unwrap();
    let locked = fake_disk(&dir, "locked.vdi", 1024);
    let healthy = fake_disk(&dir, "healthy.vdi", 4096);

    let runner = Arc::new(RecordingRunner::new());
    runner.queue_output(listing_for(&[(&locked, "VDI"), (&healthy, "VDI")]));
    runner.queue_run_result(Err(CommandError::Failed {
        program: "VBoxManage".to_string(),
        code: 1,
        stderr: None,
    }));

    let manager = VboxManage::new(runner.clone(), PathBuf::from("VBoxManage"));
    let summary = compact_all(&manager, &test_config()).await.unwrap();

    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0, locked);
    assert_eq!(summary.compacted.len(), 1);
    assert_eq!(summary.compacted[0].location, healthy);

    // Both compactions were attempted
    let compactions: Vec<_> = runner
        .calls()
        .into_iter()
        .filter(|c| c.mode == CaptureMode::Streamed)
        .collect();
    assert_eq!(compactions.len(), 2);
}

#[tokio::test]
async fn unreadable_disk_is_recorded_not_fatal() {
    let dir = TempDir::new().unwrap();
    let ghost = dir.path().join("ghost.vdi"); // never created

    let runner = Arc::new(RecordingRunner::new());
    runner.queue_output(listing_for(&[(&ghost, "VDI")]));

    let manager = VboxManage::new(runner.clone(), PathBuf::from("VBoxManage"));
    let summary = compact_all(&manager, &test_config()).await.unwrap();

    assert_eq!(summary.failed.len(), 1);
    // stat fails before any compaction is attempted
    assert_eq!(runner.calls().len(), 1);
}

#[tokio::test]
async fn malformed_listing_aborts_the_run() {
    let runner = Arc::new(RecordingRunner::new());
    runner.queue_output("UUID: abc\nState: created\n");

    let manager = VboxManage::new(runner, PathBuf::from("VBoxManage"));
    let err = compact_all(&manager, &test_config()).await.unwrap_err();
    assert!(err.to_string().contains("Location"));
}

#[tokio::test]
async fn empty_registry_compacts_nothing() {
    let runner = Arc::new(RecordingRunner::new());
    runner.queue_output("\n");

    let manager = VboxManage::new(runner.clone(), PathBuf::from("VBoxManage"));
    let summary = compact_all(&manager, &test_config()).await.unwrap();

    assert!(summary.compacted.is_empty());
    assert!(summary.skipped.is_empty());
    assert_eq!(runner.calls().len(), 1);
}
