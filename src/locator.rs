//! Service locator boundary.
//!
//! The locator is an external collaborator: it maps a [`HandlerKey`] to a
//! handler instance or reports that nothing is registered. The dispatcher
//! receives one at construction and treats it as opaque; it never reaches
//! into process-wide state. [`crate::HandlerRegistry`] is the in-crate
//! implementation, but anything that can produce an [`ErasedHandler`] per
//! key works - a DI container adapter, a per-request scope, a test double.
//!
//! Handlers cross this boundary type-erased because a single locator must
//! store handlers for many different request types. [`erase`] builds the
//! erased form; the dispatcher downcasts it back against the same key it
//! resolved with, so a successful downcast is guaranteed for any locator
//! that only stores entries built by [`erase`] under their own key.

use std::any::Any;
use std::sync::Arc;

use crate::handler::Handler;
use crate::key::HandlerKey;
use crate::request::Request;

/// Type-erased handler instance as stored and resolved by locators.
pub type ErasedHandler = Arc<dyn Any + Send + Sync>;

/// Maps a lookup key to a handler instance.
///
/// Implementations must be safe for concurrent resolution; the dispatcher
/// queries read-only and imposes no locking of its own. Whether `resolve`
/// constructs a fresh instance per call or returns a shared one is the
/// implementation's lifetime policy - the dispatcher re-resolves on every
/// dispatch, so per-request scoping is respected.
pub trait ServiceLocator: Send + Sync {
    /// Resolve the handler registered for `key`, or `None` if nothing is.
    fn resolve(&self, key: &HandlerKey) -> Option<ErasedHandler>;
}

/// Erase a handler for storage in a locator.
pub fn erase<R: Request>(handler: Arc<dyn Handler<R>>) -> ErasedHandler {
    Arc::new(handler)
}

/// Recover the typed handler from its erased form.
///
/// Returns `None` if the erased value was not built by [`erase`] for the
/// same request type - a mismatched registration in the locator.
pub(crate) fn downcast<R: Request>(erased: &ErasedHandler) -> Option<&Arc<dyn Handler<R>>> {
    erased.downcast_ref::<Arc<dyn Handler<R>>>()
}
