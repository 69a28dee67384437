//! Error types for the upgrade pipeline

use cmd_common::CommandError;
use thiserror::Error;

/// Errors that can occur while querying or upgrading packages
#[derive(Error, Debug)]
pub enum UpdateError {
    /// pip could not be executed or exited nonzero
    #[error(transparent)]
    Command(#[from] CommandError),

    /// pip's outdated listing was not the expected JSON shape
    #[error("could not parse pip's outdated package listing: {0}")]
    MalformedListing(#[from] serde_json::Error),

    /// Reading the confirmation answer failed
    #[error("could not read confirmation input: {0}")]
    Prompt(#[from] std::io::Error),
}

/// Result type alias for upgrade operations
pub type UpdateResult<T> = Result<T, UpdateError>;
