//! Safe bridge owning one opaque token.

use crate::error::{Error, Result};
use crate::registry::{self, Token};
use crate::service::Service;

/// A bridge owning exactly one token for a host-managed [`Service`].
///
/// The bridge constructor transfers a service into the registry and records
/// the minted token; the token value never changes for the bridge's
/// lifetime. [`ServiceBridge::release`] invalidates the token and lets the
/// service be dropped; it is idempotent and also runs on drop.
///
/// # Example
///
/// ```
/// use svcbridge::ServiceBridge;
///
/// let mut bridge = ServiceBridge::new()?;
/// bridge.process(42)?;
/// bridge.release();
/// assert!(bridge.process(7).is_err());
/// # Ok::<(), svcbridge::Error>(())
/// ```
///
/// # Thread safety
///
/// The registry behind the bridge is internally synchronized, but a
/// `release` racing a `process` on the same bridge is a use-after-release
/// by construction; callers sharing a bridge across threads must provide
/// their own synchronization.
pub struct ServiceBridge {
    token: Token,
    released: bool,
}

impl ServiceBridge {
    /// Create a bridge over a fresh [`Service`].
    ///
    /// On return the token denotes a live service that will not move or be
    /// freed until [`ServiceBridge::release`].
    pub fn new() -> Result<Self> {
        Self::with_target(Service::new())
    }

    /// Create a bridge over a caller-built [`Service`].
    pub fn with_target(service: Service) -> Result<Self> {
        let token = registry::global().insert(Box::new(service));
        if token == registry::INVALID_TOKEN {
            return Err(Error::AllocationFailure(
                "registry refused to mint a token".to_string(),
            ));
        }
        Ok(Self {
            token,
            released: false,
        })
    }

    /// The opaque token backing this bridge.
    ///
    /// Foreign code receives this value; it carries no type information.
    pub fn token(&self) -> Token {
        self.token
    }

    /// Forward one message to the service.
    ///
    /// The call executes synchronously, exactly once, with no buffering or
    /// reordering. Fails with [`Error::UseAfterRelease`] after
    /// [`ServiceBridge::release`], and with [`Error::InvalidTarget`] if the
    /// token no longer resolves to a service, which indicates corruption of
    /// the boundary rather than a caller error.
    pub fn process(&self, message: i32) -> Result<()> {
        if self.released {
            return Err(Error::UseAfterRelease);
        }
        registry::global().with_mut::<Service, _>(self.token, |service| {
            service.process(message);
        })
    }

    /// Release the token, allowing the service to be reclaimed.
    ///
    /// Idempotent: second and later calls are no-ops.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        registry::global().release(self.token);
        self.released = true;
    }
}

impl Drop for ServiceBridge {
    fn drop(&mut self) {
        self.release();
    }
}
