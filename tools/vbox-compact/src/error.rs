//! Error types for the disk compaction pipeline

use std::path::PathBuf;

use cmd_common::CommandError;
use thiserror::Error;

/// Errors that can occur while enumerating or compacting disks
#[derive(Error, Debug)]
pub enum CompactError {
    /// The user's home directory could not be determined at startup
    #[error("home directory not set - ensure HOME (or USERPROFILE on Windows) is defined")]
    HomeNotSet,

    /// VBoxManage could not be executed or exited nonzero
    #[error(transparent)]
    Command(#[from] CommandError),

    /// `list hdds` produced a disk entry without a required field
    #[error("unexpected `list hdds` output: disk entry is missing the `{field}` field")]
    MalformedListing {
        /// Name of the missing field
        field: &'static str,
    },

    /// A disk image file could not be stat'ed
    #[error("cannot read disk image {path}: {source}")]
    FileAccess {
        /// Path to the image file
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// A disk image reported a size of zero bytes; the percentage of the
    /// original size is undefined for it
    #[error("disk image {path} has a size of zero bytes")]
    EmptyDisk {
        /// Path to the image file
        path: PathBuf,
    },
}

/// Result type alias for compaction operations
pub type CompactResult<T> = Result<T, CompactError>;
