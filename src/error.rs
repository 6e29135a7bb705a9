//! Error types for the svcbridge crate.

use thiserror::Error;

/// Result type alias for svcbridge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for svcbridge operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Token is zero or was never issued by the registry.
    #[error("invalid handle")]
    InvalidHandle,

    /// Function argument is invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Target construction failed.
    #[error("allocation failure: {0}")]
    AllocationFailure(String),

    /// Operation on a handle that was already released.
    #[error("use after release")]
    UseAfterRelease,

    /// Token resolved to an object of the wrong type.
    ///
    /// This indicates corruption of the boundary, not a caller error.
    #[error("invalid target: registry slot does not hold the expected type")]
    InvalidTarget,

    /// Unknown error.
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl Error {
    /// Check if this is a use-after-release error.
    pub fn is_use_after_release(&self) -> bool {
        matches!(self, Error::UseAfterRelease)
    }

    /// Check if this is an invalid-target error.
    pub fn is_invalid_target(&self) -> bool {
        matches!(self, Error::InvalidTarget)
    }

    /// Check if this is an allocation failure.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Error::AllocationFailure(_))
    }
}
