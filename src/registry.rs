//! Handler registry - the in-crate [`ServiceLocator`] implementation.
//!
//! The registry maps (request, response) keys to handler instances.
//! Registration is explicit; there is no scanning or discovery.
//!
//! # Duplicate registrations
//!
//! Registering a second handler for the same request type replaces the
//! first: **last registration wins**. This policy belongs to the registry,
//! not the dispatcher - a different [`ServiceLocator`] implementation is
//! free to choose another one. Replacements are logged at `warn` level.
//!
//! # Example
//!
//! ```
//! use courier::{HandlerRegistry, Request};
//!
//! struct Echo(String);
//!
//! impl Request for Echo {
//!     type Response = String;
//! }
//!
//! let mut registry = HandlerRegistry::new();
//! registry.register_fn(|req: Echo, _cancel| async move { Ok(req.0) });
//! assert!(registry.contains::<Echo>());
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::handler::{FnHandler, Handler};
use crate::key::HandlerKey;
use crate::locator::{erase, ErasedHandler, ServiceLocator};
use crate::request::Request;

/// Registry mapping lookup keys to handlers.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<HandlerKey, ErasedHandler>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for its request type.
    ///
    /// Replaces any existing registration for the same key (last wins).
    pub fn register<R, H>(&mut self, handler: H)
    where
        R: Request,
        H: Handler<R>,
    {
        self.insert::<R>(Arc::new(handler));
    }

    /// Register an async closure as the handler for `R`.
    ///
    /// Equivalent to wrapping the closure in [`FnHandler`] and calling
    /// [`register`](Self::register).
    pub fn register_fn<R, F, Fut>(&mut self, handler: F)
    where
        R: Request,
        F: Fn(R, CancellationToken) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R::Response>> + Send + 'static,
    {
        self.insert::<R>(Arc::new(FnHandler::new(handler)));
    }

    /// Register an already-shared handler instance.
    pub fn register_arc<R: Request>(&mut self, handler: Arc<dyn Handler<R>>) {
        self.insert::<R>(handler);
    }

    fn insert<R: Request>(&mut self, handler: Arc<dyn Handler<R>>) {
        let key = HandlerKey::of::<R>();
        if self.handlers.insert(key.clone(), erase::<R>(handler)).is_some() {
            tracing::warn!("Replaced handler for {} (last registration wins)", key);
        } else {
            tracing::debug!("Registered handler for {}", key);
        }
    }

    /// Whether a handler is registered for the request type.
    pub fn contains<R: Request>(&self) -> bool {
        self.handlers.contains_key(&HandlerKey::of::<R>())
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl ServiceLocator for HandlerRegistry {
    fn resolve(&self, key: &HandlerKey) -> Option<ErasedHandler> {
        self.handlers.get(key).map(Arc::clone)
    }
}
