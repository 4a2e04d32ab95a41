//! Error types for courier.

use thiserror::Error;

use crate::key::HandlerKey;

/// Boxed error type for failures raised inside handlers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for all dispatch operations.
#[derive(Debug, Error)]
pub enum CourierError {
    /// The locator has no registration for the computed (request, response) key.
    #[error("no handler registered for {0}")]
    HandlerNotFound(HandlerKey),

    /// A failure raised by the handler itself, passed through unchanged.
    ///
    /// The dispatcher performs no wrapping, retry, or suppression; the
    /// display output is the underlying error's own message.
    #[error("{0}")]
    Handler(BoxError),
}

impl CourierError {
    /// Wrap a domain error raised inside a handler.
    pub fn handler<E: Into<BoxError>>(err: E) -> Self {
        CourierError::Handler(err.into())
    }

    /// Access the underlying handler error, if this is one.
    ///
    /// Callers that need differentiated behavior (e.g. retry only on
    /// transient handler failures, never on missing registrations) can
    /// downcast through the returned reference.
    pub fn handler_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            CourierError::Handler(e) => Some(e.as_ref()),
            CourierError::HandlerNotFound(_) => None,
        }
    }
}

/// Result type alias using CourierError.
pub type Result<T> = std::result::Result<T, CourierError>;
