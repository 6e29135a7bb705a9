//! Error conversion utilities for the exported surface.

use std::ffi::CString;

use super::raw::{
    SbError, SbErrorCode, SB_ERR_ALLOCATION, SB_ERR_INVALID_ARGUMENT, SB_ERR_INVALID_HANDLE,
    SB_ERR_INVALID_TARGET, SB_ERR_UNKNOWN, SB_ERR_USE_AFTER_RELEASE, SB_OK,
};
use crate::error::Error;

/// Map a Rust error to its C error code.
pub fn code_for(err: &Error) -> SbErrorCode {
    match err {
        Error::InvalidHandle => SB_ERR_INVALID_HANDLE,
        Error::InvalidArgument(_) => SB_ERR_INVALID_ARGUMENT,
        Error::AllocationFailure(_) => SB_ERR_ALLOCATION,
        Error::UseAfterRelease => SB_ERR_USE_AFTER_RELEASE,
        Error::InvalidTarget => SB_ERR_INVALID_TARGET,
        Error::Unknown(_) => SB_ERR_UNKNOWN,
    }
}

/// Fill a caller-provided error struct from a Rust error and return its code.
///
/// The message string is allocated here and owned by the caller, who must
/// release it with `sb_error_free`.
///
/// # Safety
///
/// `out` must be null or point to a writable `SbError`.
pub unsafe fn fill_error(out: *mut SbError, err: &Error) -> SbErrorCode {
    let code = code_for(err);
    if !out.is_null() {
        if !(*out).message.is_null() {
            // Struct is being reused; reclaim the previous message.
            drop(CString::from_raw((*out).message));
        }
        let message = CString::new(err.to_string()).unwrap_or_default();
        (*out).code = code;
        (*out).message = message.into_raw();
    }
    code
}

/// Reset a caller-provided error struct to the success state.
///
/// # Safety
///
/// `out` must be null or point to a writable `SbError` whose message field
/// is null or a string previously allocated by this crate.
pub unsafe fn clear_error(out: *mut SbError) -> SbErrorCode {
    if !out.is_null() {
        if !(*out).message.is_null() {
            drop(CString::from_raw((*out).message));
        }
        (*out).code = SB_OK;
        (*out).message = std::ptr::null_mut();
    }
    SB_OK
}
