//! Exported C surface tests.
//!
//! These call the `sb_*` entry points directly, the way a foreign consumer
//! would after linking against the compiled library.

use std::ffi::CStr;

use svcbridge::ffi::{
    sb_api_version, sb_api_version_compatible, sb_error_free, sb_free_string, sb_service_free,
    sb_service_new, sb_service_process, SbError, SbService, SB_ERR_INVALID_ARGUMENT,
    SB_ERR_INVALID_HANDLE, SB_ERR_USE_AFTER_RELEASE, SB_OK,
};

#[test]
fn test_api_version_string() {
    let ptr = sb_api_version();
    assert!(!ptr.is_null(), "version string should not be null");

    let version = unsafe { CStr::from_ptr(ptr) }
        .to_string_lossy()
        .into_owned();
    assert_eq!(version, "0.1.0");

    unsafe { sb_free_string(ptr) };
}

#[test]
fn test_api_version_compatible() {
    assert!(sb_api_version_compatible(0, 1));
    assert!(sb_api_version_compatible(0, 0));
    assert!(!sb_api_version_compatible(1, 0));
    assert!(!sb_api_version_compatible(0, 99));
}

#[test]
fn test_create_process_free_cycle() {
    unsafe {
        let mut handle = SbService::invalid();
        let mut err = SbError::default();

        let code = sb_service_new(&mut handle, &mut err);
        assert_eq!(code, SB_OK, "sb_service_new should succeed");
        assert!(handle.is_valid(), "returned handle should be valid");

        let code = sb_service_process(handle, 42, &mut err);
        assert_eq!(code, SB_OK, "sb_service_process should succeed");

        let code = sb_service_free(handle);
        assert_eq!(code, SB_OK, "sb_service_free should succeed");
    }
}

#[test]
fn test_process_after_free_reports_use_after_release() {
    unsafe {
        let mut handle = SbService::invalid();
        let mut err = SbError::default();

        assert_eq!(sb_service_new(&mut handle, &mut err), SB_OK);
        assert_eq!(sb_service_free(handle), SB_OK);

        let code = sb_service_process(handle, 7, &mut err);
        assert_eq!(code, SB_ERR_USE_AFTER_RELEASE);
        assert_eq!(err.code, SB_ERR_USE_AFTER_RELEASE);

        // The error struct carries a human-readable message.
        assert!(!err.message.is_null(), "error message should be set");
        let message = CStr::from_ptr(err.message).to_string_lossy().into_owned();
        assert!(
            message.contains("release"),
            "unexpected error message: {message}"
        );

        sb_error_free(&mut err);
        assert!(err.message.is_null(), "sb_error_free should clear message");
        assert_eq!(err.code, SB_OK);
    }
}

#[test]
fn test_double_free_is_noop() {
    unsafe {
        let mut handle = SbService::invalid();
        let mut err = SbError::default();

        assert_eq!(sb_service_new(&mut handle, &mut err), SB_OK);
        assert_eq!(sb_service_free(handle), SB_OK);
        assert_eq!(sb_service_free(handle), SB_OK, "double free must be a no-op");
    }
}

#[test]
fn test_invalid_handle_rejected() {
    unsafe {
        let mut err = SbError::default();

        let code = sb_service_process(SbService::invalid(), 1, &mut err);
        assert_eq!(code, SB_ERR_INVALID_HANDLE);
        sb_error_free(&mut err);

        // A token that was never issued is rejected the same way.
        let bogus = SbService::from_token(u64::MAX);
        let code = sb_service_process(bogus, 1, &mut err);
        assert_eq!(code, SB_ERR_INVALID_HANDLE);
        sb_error_free(&mut err);
    }
}

#[test]
fn test_null_out_pointer_rejected() {
    unsafe {
        let mut err = SbError::default();
        let code = sb_service_new(std::ptr::null_mut(), &mut err);
        assert_eq!(code, SB_ERR_INVALID_ARGUMENT);
        assert_eq!(err.code, SB_ERR_INVALID_ARGUMENT);
        sb_error_free(&mut err);
    }
}

#[test]
fn test_null_error_pointer_accepted() {
    unsafe {
        let mut handle = SbService::invalid();

        // Callers may opt out of error details entirely.
        assert_eq!(sb_service_new(&mut handle, std::ptr::null_mut()), SB_OK);
        assert_eq!(
            sb_service_process(handle, 3, std::ptr::null_mut()),
            SB_OK
        );
        assert_eq!(sb_service_free(handle), SB_OK);

        let code = sb_service_process(handle, 3, std::ptr::null_mut());
        assert_eq!(code, SB_ERR_USE_AFTER_RELEASE);
    }
}

#[test]
fn test_handles_are_distinct() {
    unsafe {
        let mut a = SbService::invalid();
        let mut b = SbService::invalid();
        let mut err = SbError::default();

        assert_eq!(sb_service_new(&mut a, &mut err), SB_OK);
        assert_eq!(sb_service_new(&mut b, &mut err), SB_OK);
        assert_ne!(a, b, "independently created handles must be distinct");

        // Freeing one must not invalidate the other.
        assert_eq!(sb_service_free(a), SB_OK);
        assert_eq!(sb_service_process(b, 5, &mut err), SB_OK);
        assert_eq!(sb_service_free(b), SB_OK);
    }
}
