//! Handler capability - the polymorphic unit that produces a response.
//!
//! Each concrete handler implements [`Handler`] for exactly one
//! (request type, response type) pair. Side effects are entirely
//! handler-defined; the dispatcher neither inspects nor constrains them.
//!
//! # Example
//!
//! ```
//! use courier::{BoxFuture, Handler, Request, Result};
//! use tokio_util::sync::CancellationToken;
//!
//! struct Echo(String);
//!
//! impl Request for Echo {
//!     type Response = String;
//! }
//!
//! struct EchoHandler;
//!
//! impl Handler<Echo> for EchoHandler {
//!     fn handle(&self, request: Echo, _cancel: CancellationToken) -> BoxFuture<'_, Result<String>> {
//!         Box::pin(async move { Ok(request.0) })
//!     }
//! }
//! ```

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::request::Request;

/// Boxed future for handler results.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Trait for request handlers.
///
/// The cancellation token is forwarded from the caller unmodified; whether
/// cancellation aborts promptly or is ignored is the handler's own policy.
pub trait Handler<R: Request>: Send + Sync + 'static {
    /// Handle a request and produce the declared response.
    fn handle(&self, request: R, cancel: CancellationToken) -> BoxFuture<'_, Result<R::Response>>;
}

/// Wrapper that turns an async closure into a [`Handler`].
///
/// Lets closure-based registration work exactly like struct handlers:
///
/// ```
/// use courier::{FnHandler, Request};
///
/// struct Echo(String);
/// impl Request for Echo {
///     type Response = String;
/// }
///
/// let handler = FnHandler::new(|req: Echo, _cancel| async move { Ok(req.0) });
/// # let _ = handler;
/// ```
pub struct FnHandler<F, R, Fut>
where
    F: Fn(R, CancellationToken) -> Fut + Send + Sync + 'static,
    R: Request,
    Fut: Future<Output = Result<R::Response>> + Send + 'static,
{
    handler: F,
    _phantom: PhantomData<fn(R) -> Fut>,
}

impl<F, R, Fut> FnHandler<F, R, Fut>
where
    F: Fn(R, CancellationToken) -> Fut + Send + Sync + 'static,
    R: Request,
    Fut: Future<Output = Result<R::Response>> + Send + 'static,
{
    /// Create a new closure-backed handler.
    pub fn new(handler: F) -> Self {
        Self {
            handler,
            _phantom: PhantomData,
        }
    }
}

impl<F, R, Fut> Handler<R> for FnHandler<F, R, Fut>
where
    F: Fn(R, CancellationToken) -> Fut + Send + Sync + 'static,
    R: Request,
    Fut: Future<Output = Result<R::Response>> + Send + 'static,
{
    fn handle(&self, request: R, cancel: CancellationToken) -> BoxFuture<'_, Result<R::Response>> {
        Box::pin((self.handler)(request, cancel))
    }
}
