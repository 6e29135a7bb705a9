//! Handle types for opaque references handed to foreign code.
//!
//! Each handle type is a newtype wrapper around u64 to provide type safety.

/// Macro to define a handle type.
macro_rules! define_handle {
    ($name:ident) => {
        /// Opaque handle to a host-owned object.
        #[repr(C)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            _h: u64,
        }

        impl $name {
            /// Create an invalid (null) handle.
            #[inline]
            pub const fn invalid() -> Self {
                Self { _h: 0 }
            }

            /// Create a handle from a raw token value.
            #[inline]
            pub const fn from_token(token: u64) -> Self {
                Self { _h: token }
            }

            /// The raw token value.
            #[inline]
            pub const fn token(&self) -> u64 {
                self._h
            }

            /// Check if this handle is valid (non-zero).
            #[inline]
            pub const fn is_valid(&self) -> bool {
                self._h != 0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::invalid()
            }
        }
    };
}

define_handle!(SbService);
