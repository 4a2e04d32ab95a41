//! Request/response type contract.
//!
//! A request declares, as part of its type, the response type that will be
//! produced for it. The contract is purely compile-time: no methods, no
//! runtime state. It lets the dispatcher's entry point be generic over "any
//! request whose response type is known" and lets handler authors declare
//! "I handle exactly this request, producing exactly this response" with
//! the compiler checking both ends.
//!
//! # Example
//!
//! ```
//! use courier::Request;
//!
//! struct GetUser {
//!     id: u64,
//! }
//!
//! impl Request for GetUser {
//!     type Response = String;
//! }
//! ```

/// Marker trait tying a request type to the response type it produces.
///
/// Requests are immutable values consumed by dispatch: caller-created,
/// passed once to [`Sender::send`](crate::Sender::send), then discarded.
/// The `'static` bounds exist because the (request, response) pair is used
/// as a runtime lookup key via `TypeId`.
pub trait Request: Send + 'static {
    /// The response type produced by the handler for this request.
    type Response: Send + 'static;
}
