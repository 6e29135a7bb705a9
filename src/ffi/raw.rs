//! ABI data definitions shared with foreign callers.
//!
//! Everything here is `#[repr(C)]` or a plain integer constant; the layout
//! is the contract consumers compile against.

use std::os::raw::{c_char, c_int};

/// Error code returned by exported functions.
pub type SbErrorCode = c_int;

// Error codes
pub const SB_OK: SbErrorCode = 0;
pub const SB_ERR_INVALID_HANDLE: SbErrorCode = 1;
pub const SB_ERR_INVALID_ARGUMENT: SbErrorCode = 2;
pub const SB_ERR_USE_AFTER_RELEASE: SbErrorCode = 3;
pub const SB_ERR_INVALID_TARGET: SbErrorCode = 4;
pub const SB_ERR_ALLOCATION: SbErrorCode = 5;
pub const SB_ERR_UNKNOWN: SbErrorCode = 99;

/// C error structure.
///
/// `message` is allocated by this library when an error is reported and
/// must be released with `sb_error_free`.
#[repr(C)]
pub struct SbError {
    pub code: SbErrorCode,
    pub message: *mut c_char,
}

impl Default for SbError {
    fn default() -> Self {
        Self {
            code: SB_OK,
            message: std::ptr::null_mut(),
        }
    }
}
