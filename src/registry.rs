//! Token registry: the owning-side table behind every handle.
//!
//! The registry holds the only strong reference to each target, so a live
//! entry can neither move nor be freed while foreign code holds its token.
//! Tokens are minted monotonically starting at 1 and never reused; zero is
//! the invalid sentinel. Because tokens are never reused, a missing entry
//! below the mint watermark can only mean "issued and later released".

use std::any::Any;
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

use crate::error::{Error, Result};

/// Opaque token identifying a registry entry.
///
/// Carries no type information; the registry performs the type check at
/// resolution time.
pub type Token = u64;

/// The invalid (null) token value.
pub const INVALID_TOKEN: Token = 0;

struct Table {
    /// Next token to mint. Everything in `1..next` has been issued.
    next: Token,
    slots: HashMap<Token, Box<dyn Any + Send>>,
}

/// Table of strong references indexed by opaque token.
pub struct Registry {
    inner: Mutex<Table>,
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The process-wide registry backing the exported C surface.
pub fn global() -> &'static Registry {
    &GLOBAL
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Table {
                next: 1,
                slots: HashMap::new(),
            }),
        }
    }

    /// Transfer ownership of `target` into the registry and mint a token
    /// for it. The returned token is valid until [`Registry::release`].
    pub fn insert(&self, target: Box<dyn Any + Send>) -> Token {
        let mut table = self.inner.lock().expect("registry mutex poisoned");
        let token = table.next;
        table.next += 1;
        table.slots.insert(token, target);
        token
    }

    /// Resolve `token` to a `&mut T` and run `f` against it.
    ///
    /// The closure runs with the table locked, so the entry cannot be
    /// released out from under it.
    pub fn with_mut<T, R>(&self, token: Token, f: impl FnOnce(&mut T) -> R) -> Result<R>
    where
        T: Any,
    {
        let mut table = self.inner.lock().expect("registry mutex poisoned");
        if token == INVALID_TOKEN || token >= table.next {
            return Err(Error::InvalidHandle);
        }
        let slot = table.slots.get_mut(&token).ok_or(Error::UseAfterRelease)?;
        let target = slot.downcast_mut::<T>().ok_or(Error::InvalidTarget)?;
        Ok(f(target))
    }

    /// Remove the entry for `token`, allowing the target to be dropped.
    ///
    /// Returns `true` if an entry was removed. Releasing an invalid or
    /// already-released token is a no-op.
    pub fn release(&self, token: Token) -> bool {
        let mut table = self.inner.lock().expect("registry mutex poisoned");
        table.slots.remove(&token).is_some()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        let table = self.inner.lock().expect("registry mutex poisoned");
        table.slots.len()
    }

    /// Whether the registry holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
