//! Exported C entry points.
//!
//! This module is the boundary: foreign code links against these symbols
//! and drives host-owned services through opaque handles without ever
//! seeing their real representation. The exported surface is the stable
//! sequence (constructor, `process(int)`, destructor) plus the version and
//! memory-management helpers every consumer needs.

pub mod error;
pub mod handles;
pub mod raw;

pub use error::{clear_error, code_for, fill_error};
pub use handles::SbService;
pub use raw::*;

use std::ffi::CString;
use std::os::raw::c_char;

use crate::error::Error;
use crate::registry;
use crate::service::Service;
use crate::version;

/// Get the API version string (e.g., "0.1.0").
///
/// The returned string must be released with [`sb_free_string`].
#[no_mangle]
pub extern "C" fn sb_api_version() -> *mut c_char {
    let version = format!("{}.{}.{}", version::MAJOR, version::MINOR, version::PATCH);
    CString::new(version)
        .expect("version string contains no null bytes")
        .into_raw()
}

/// Check if the library is compatible with code compiled against the given
/// major.minor version.
#[no_mangle]
pub extern "C" fn sb_api_version_compatible(major: i32, minor: i32) -> bool {
    major == version::MAJOR && minor <= version::MINOR
}

/// Construct a service and return a handle to it.
///
/// On success writes a valid handle to `out` and returns `SB_OK`. On
/// failure fills `err` (if non-null) and returns the error code.
///
/// # Safety
///
/// `out` must point to a writable `SbService`; `err` must be null or point
/// to an initialized `SbError`.
#[no_mangle]
pub unsafe extern "C" fn sb_service_new(out: *mut SbService, err: *mut SbError) -> SbErrorCode {
    if out.is_null() {
        return fill_error(
            err,
            &Error::InvalidArgument("out handle pointer is null".to_string()),
        );
    }

    let token = registry::global().insert(Box::new(Service::new()));
    *out = SbService::from_token(token);
    clear_error(err)
}

/// Forward one message to the service behind `handle`.
///
/// The call executes synchronously, exactly once. Returns
/// `SB_ERR_USE_AFTER_RELEASE` if the handle was already freed and
/// `SB_ERR_INVALID_HANDLE` if it was never issued.
///
/// # Safety
///
/// `err` must be null or point to an initialized `SbError`.
#[no_mangle]
pub unsafe extern "C" fn sb_service_process(
    handle: SbService,
    message: i32,
    err: *mut SbError,
) -> SbErrorCode {
    let result = registry::global().with_mut::<Service, _>(handle.token(), |service| {
        service.process(message);
    });

    match result {
        Ok(()) => clear_error(err),
        Err(e) => fill_error(err, &e),
    }
}

/// Release the service behind `handle`, making it reclaimable.
///
/// Idempotent: freeing an invalid or already-freed handle is a no-op
/// success.
#[no_mangle]
pub extern "C" fn sb_service_free(handle: SbService) -> SbErrorCode {
    if handle.is_valid() {
        registry::global().release(handle.token());
    }
    SB_OK
}

/// Number of live handles currently held by the library.
///
/// Returns to its prior value once every created handle has been freed;
/// useful as a leak check.
#[no_mangle]
pub extern "C" fn sb_live_handles() -> usize {
    registry::global().len()
}

/// Release an error struct's message string.
///
/// # Safety
///
/// `err` must be null or point to an `SbError` whose message was set by
/// this library and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn sb_error_free(err: *mut SbError) {
    if err.is_null() {
        return;
    }
    if !(*err).message.is_null() {
        drop(CString::from_raw((*err).message));
        (*err).message = std::ptr::null_mut();
    }
    (*err).code = SB_OK;
}

/// Free a string allocated by this library.
///
/// # Safety
///
/// `s` must be null or a pointer previously returned by this library and
/// not yet freed.
#[no_mangle]
pub unsafe extern "C" fn sb_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
