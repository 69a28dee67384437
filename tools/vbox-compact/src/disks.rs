//! Parsing of `VBoxManage list hdds` output
//!
//! The listing is a sequence of blank-line-separated blocks, one per disk,
//! each made of `Key: value` lines:
//!
//! ```text
//! UUID:           0799b382-8b53-4707-a0d2-612bae21e0c3
//! Parent UUID:    base
//! State:          created
//! Location:       C:\Users\dev\VirtualBox VMs\dev\dev.vdi
//! Storage format: VDI
//! Capacity:       65536 MBytes
//! ```
//!
//! Only `Location` and `Storage format` are consumed. A block missing either
//! field means VBoxManage changed its output shape, which is a hard error
//! rather than a skip.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{CompactError, CompactResult};

/// One virtual disk known to VirtualBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskRecord {
    /// Filesystem path of the disk image
    pub location: PathBuf,
    /// Storage format tag, e.g. "VDI" or "VMDK"
    pub format: String,
}

/// Split a line on its first colon into trimmed (key, value) halves
///
/// Values may themselves contain colons (Windows drive letters), so only the
/// first colon delimits.
pub fn split_colon_line(line: &str) -> (&str, &str) {
    match line.split_once(':') {
        Some((key, value)) => (key.trim(), value.trim()),
        None => (line.trim(), ""),
    }
}

/// Parse a full `list hdds` listing into disk records
///
/// An empty or whitespace-only listing yields an empty vector (no disks
/// registered).
///
/// # Errors
///
/// Fails with [`CompactError::MalformedListing`] when a block lacks
/// `Location` or `Storage format`.
pub fn parse_disk_list(listing: &str) -> CompactResult<Vec<DiskRecord>> {
    let trimmed = listing.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed.split("\n\n").map(parse_disk_block).collect()
}

fn parse_disk_block(block: &str) -> CompactResult<DiskRecord> {
    let fields: HashMap<&str, &str> = block.lines().map(split_colon_line).collect();

    let location = fields
        .get("Location")
        .ok_or(CompactError::MalformedListing { field: "Location" })?;
    let format = fields
        .get("Storage format")
        .ok_or(CompactError::MalformedListing {
            field: "Storage format",
        })?;

    Ok(DiskRecord {
        location: PathBuf::from(location),
        format: (*format).to_string(),
    })
}
