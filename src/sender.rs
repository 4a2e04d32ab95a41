//! The dispatcher - resolves and invokes the handler for a request.
//!
//! [`Sender`] is stateless beyond its locator reference: each call computes
//! the lookup key from the request's type, asks the locator for the one
//! handler registered under it, invokes it, and returns the handler's
//! result verbatim. Nothing is cached between calls, so a locator that
//! scopes handler lifetimes (per-request instances, say) keeps control.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use courier::{HandlerRegistry, Request, Sender};
//!
//! struct Echo(String);
//!
//! impl Request for Echo {
//!     type Response = String;
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut registry = HandlerRegistry::new();
//! registry.register_fn(|req: Echo, _cancel| async move { Ok(req.0) });
//!
//! let sender = Sender::new(Arc::new(registry));
//! let reply = sender.send(Echo("hello".into())).await.unwrap();
//! assert_eq!(reply, "hello");
//! # }
//! ```

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::error::{CourierError, Result};
use crate::key::HandlerKey;
use crate::locator::{downcast, ServiceLocator};
use crate::request::Request;

/// Dispatcher for typed requests.
///
/// `Clone` and safe to share across concurrently running tasks: it holds no
/// per-call state, so many `send` calls may proceed in parallel without
/// coordination, provided the locator is safe for concurrent queries (its
/// `Send + Sync` bound).
#[derive(Clone)]
pub struct Sender {
    locator: Arc<dyn ServiceLocator>,
}

impl Sender {
    /// Create a dispatcher over the given locator.
    ///
    /// The locator is the only state; the dispatcher queries it read-only.
    pub fn new(locator: Arc<dyn ServiceLocator>) -> Self {
        Self { locator }
    }

    /// Dispatch a request with no cancellation signal.
    ///
    /// The handler receives a fresh token that is never cancelled, the
    /// equivalent of "cancellation = none".
    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response> {
        self.send_with_cancellation(request, CancellationToken::new())
            .await
    }

    /// Dispatch a request, forwarding the caller's cancellation token.
    ///
    /// The token is threaded through to the handler unmodified; the
    /// dispatcher never observes it. Whether cancellation aborts promptly
    /// or is ignored is the handler's own policy.
    ///
    /// # Errors
    ///
    /// - [`CourierError::HandlerNotFound`] if the locator has no usable
    ///   registration for the (request, response) key; the error names the
    ///   key so missing registrations are diagnosable from the message.
    /// - Any error the handler itself returns, propagated unchanged.
    pub async fn send_with_cancellation<R: Request>(
        &self,
        request: R,
        cancel: CancellationToken,
    ) -> Result<R::Response> {
        let key = HandlerKey::of::<R>();

        tracing::debug!("Resolving handler for {}", key);
        let erased = self
            .locator
            .resolve(&key)
            .ok_or_else(|| CourierError::HandlerNotFound(key.clone()))?;

        // A resolved instance of the wrong type is a mismatched
        // registration in the locator; surface it as the lookup failing.
        let handler = downcast::<R>(&erased).ok_or_else(|| {
            tracing::error!("Locator returned a mismatched instance for {}", key);
            CourierError::HandlerNotFound(key.clone())
        })?;

        handler.handle(request, cancel).await
    }
}
