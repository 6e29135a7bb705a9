//! Opaque-handle bridge for exposing host-owned services over a C ABI.
//!
//! This crate owns service objects on behalf of foreign code. Each service
//! lives in a process-wide registry that holds the only strong reference to
//! it, so the object can neither move nor be freed while the caller holds
//! its token. Foreign code receives a fixed-size opaque handle and drives
//! the service through three exported entry points: constructor,
//! `process(int)`, destructor.
//!
//! # Example
//!
//! ```
//! use svcbridge::ServiceBridge;
//!
//! fn main() -> svcbridge::Result<()> {
//!     // Construct a service; the bridge now owns its token.
//!     let mut bridge = ServiceBridge::new()?;
//!
//!     // Forward a message across the boundary.
//!     bridge.process(42)?;
//!
//!     // Release the token; the service becomes reclaimable.
//!     bridge.release();
//!
//!     // Any later use fails fast.
//!     assert!(bridge.process(7).unwrap_err().is_use_after_release());
//!
//!     Ok(())
//! }
//! ```
//!
//! # The C surface
//!
//! Consumers that link against the compiled library use the `sb_*` symbol
//! set in [`ffi`]: `sb_service_new`, `sb_service_process`,
//! `sb_service_free`, plus version queries and string/error release
//! helpers. Handles are u64 newtypes with zero as the invalid sentinel;
//! errors come back as an integer code plus an out-param struct.

pub mod bridge;
pub mod error;
pub mod ffi;
pub mod registry;
pub mod service;

// Re-export main types at the crate root
pub use bridge::ServiceBridge;
pub use error::{Error, Result};
pub use registry::{Registry, Token};
pub use service::Service;

/// API version constants.
pub mod version {
    /// API major version.
    pub const MAJOR: i32 = 0;
    /// API minor version.
    pub const MINOR: i32 = 1;
    /// API patch version.
    pub const PATCH: i32 = 0;
}

/// Get the API version string (e.g., "0.1.0").
pub fn api_version() -> String {
    format!("{}.{}.{}", version::MAJOR, version::MINOR, version::PATCH)
}

/// Check if the library is compatible with the given version.
///
/// Returns `true` if the library is compatible with code compiled against
/// the specified major.minor version.
pub fn api_version_compatible(major: i32, minor: i32) -> bool {
    major == version::MAJOR && minor <= version::MINOR
}

/// Number of live handles currently held by the registry.
pub fn live_handles() -> usize {
    registry::global().len()
}
