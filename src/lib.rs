//! # courier
//!
//! Minimal in-process request/response dispatcher.
//!
//! Callers submit a typed request value and receive a typed response; the
//! dispatcher locates and invokes the single handler registered for that
//! request's concrete type, without the caller ever naming the handler.
//!
//! ## Architecture
//!
//! - **Request contract**: [`Request`] ties a request type to its response
//!   type at compile time
//! - **Handler**: [`Handler`] produces the response for exactly one
//!   (request, response) pair, asynchronously, observing a cancellation token
//! - **Locator**: [`ServiceLocator`] maps a [`HandlerKey`] to a handler
//!   instance; [`HandlerRegistry`] is the in-crate implementation
//! - **Dispatcher**: [`Sender`] computes the key, resolves, invokes, and
//!   returns the handler's result verbatim
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use courier::{HandlerRegistry, Request, Sender};
//!
//! struct Greet {
//!     name: String,
//! }
//!
//! impl Request for Greet {
//!     type Response = String;
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut registry = HandlerRegistry::new();
//! registry.register_fn(|req: Greet, _cancel| async move {
//!     Ok(format!("hello, {}", req.name))
//! });
//!
//! let sender = Sender::new(Arc::new(registry));
//! let reply = sender.send(Greet { name: "world".into() }).await.unwrap();
//! assert_eq!(reply, "hello, world");
//! # }
//! ```

pub mod error;
pub mod handler;
pub mod key;
pub mod locator;
pub mod registry;
pub mod request;

mod sender;

pub use error::{BoxError, CourierError, Result};
pub use handler::{BoxFuture, FnHandler, Handler};
pub use key::HandlerKey;
pub use locator::{erase, ErasedHandler, ServiceLocator};
pub use registry::HandlerRegistry;
pub use request::Request;
pub use sender::Sender;
