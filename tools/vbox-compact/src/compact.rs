//! The compaction pipeline: filter, compact, measure, report
//!
//! Disks are processed one at a time. A failure on one disk is recorded and
//! the batch moves on to the next; the summary at the end says what was
//! compacted, what was skipped, and what failed.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::CompactConfig;
use crate::disks::{parse_disk_list, DiskRecord};
use crate::error::{CompactError, CompactResult};
use crate::manager::VboxManage;

const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Format a byte count as a human-readable base-1024 size
///
/// Two-decimal precision; the unit is chosen by repeated division while the
/// value is at least 1024 and a larger unit remains, so exactly 1024 bytes
/// reports as "1.00KiB" and anything above a TiB stays in TiB.
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2}{}", value, UNITS[unit])
}

/// New size as a percentage of the original
///
/// # Errors
///
/// A zero-byte original makes the ratio undefined; that is reported as
/// [`CompactError::EmptyDisk`] instead of dividing by zero.
pub fn percent_of_original(path: &Path, original: u64, new: u64) -> CompactResult<f64> {
    if original == 0 {
        return Err(CompactError::EmptyDisk {
            path: path.to_path_buf(),
        });
    }
    Ok(new as f64 / original as f64 * 100.0)
}

/// Measurements for one successfully compacted disk
#[derive(Debug, Clone)]
pub struct DiskReport {
    pub location: PathBuf,
    pub original_bytes: u64,
    pub new_bytes: u64,
}

/// Outcome of a whole compaction run
#[derive(Debug, Default)]
pub struct CompactSummary {
    /// Disks compacted, in enumeration order
    pub compacted: Vec<DiskReport>,
    /// Disks skipped because their format is not compactable
    pub skipped: Vec<DiskRecord>,
    /// Disks whose compaction failed, with the failure
    pub failed: Vec<(PathBuf, CompactError)>,
}

/// Enumerate, filter, and compact every eligible disk
///
/// Non-target formats are reported as skipped. A single disk's failure does
/// not stop the batch; it lands in [`CompactSummary::failed`] and the run
/// continues with the next disk. Enumeration problems (VBoxManage not
/// runnable, malformed listing) are hard errors.
pub async fn compact_all(
    manager: &VboxManage,
    config: &CompactConfig,
) -> CompactResult<CompactSummary> {
    let listing = manager.list_hdds().await?;
    let disks = parse_disk_list(&listing)?;
    info!(count = disks.len(), "enumerated virtual disks");

    let mut summary = CompactSummary::default();

    for disk in disks {
        if disk.format != config.target_format {
            println!(
                "Skipping non-{} disk {}",
                config.target_format,
                disk.location.display()
            );
            summary.skipped.push(disk);
            continue;
        }

        match compact_disk(manager, &disk.location).await {
            Ok(report) => summary.compacted.push(report),
            Err(err) => {
                warn!(disk = %disk.location.display(), error = %err, "compaction failed, continuing");
                summary.failed.push((disk.location, err));
            }
        }
    }

    Ok(summary)
}

/// Compact one disk and report its before/after sizes
async fn compact_disk(manager: &VboxManage, location: &Path) -> CompactResult<DiskReport> {
    let original_bytes = file_size(location).await?;

    println!("Compacting {}", location.display());
    manager.compact_medium(location).await?;

    let new_bytes = file_size(location).await?;
    let percent = percent_of_original(location, original_bytes, new_bytes)?;

    println!("\tOriginal Size       : {}", human_size(original_bytes));
    println!("\tNew Size            : {}", human_size(new_bytes));
    println!("\tPercent of original : {:.2}%", percent);

    Ok(DiskReport {
        location: location.to_path_buf(),
        original_bytes,
        new_bytes,
    })
}

async fn file_size(path: &Path) -> CompactResult<u64> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|source| CompactError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(metadata.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_below_one_kib_stay_in_bytes() {
        assert_eq!(human_size(0), "0.00B");
        assert_eq!(human_size(512), "512.00B");
        assert_eq!(human_size(1023), "1023.00B");
    }

    #[test]
    fn unit_boundaries() {
        assert_eq!(human_size(1024), "1.00KiB");
        assert_eq!(human_size(1_048_576), "1.00MiB");
        assert_eq!(human_size(1_610_612_736), "1.50GiB");
    }

    #[test]
    fn very_large_sizes_cap_at_tib() {
        // 5 PiB still reports in TiB, the largest unit available
        assert_eq!(human_size(5 * 1024u64.pow(5)), "5120.00TiB");
    }

    #[test]
    fn percentage_is_exact_for_simple_ratios() {
        let percent = percent_of_original(Path::new("a.vdi"), 1000, 500).unwrap();
        assert_eq!(format!("{:.2}%", percent), "50.00%");
    }

    #[test]
    fn zero_original_size_is_a_defined_error() {
        let err = percent_of_original(Path::new("a.vdi"), 0, 0).unwrap_err();
        assert!(matches!(err, CompactError::EmptyDisk { .. }));
    }

    #[tokio::test]
    async fn missing_file_is_a_file_access_error() {
        let err = file_size(Path::new("/no/such/disk.vdi")).await.unwrap_err();
        assert!(matches!(err, CompactError::FileAccess { .. }));
    }
}
