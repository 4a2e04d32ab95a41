//! Lookup keys identifying (request, response) type pairs.

use std::any::{type_name, TypeId};
use std::fmt;

use crate::request::Request;

/// Composite key identifying the handler for a (request, response) pair.
///
/// Equality and hashing are driven by the `TypeId`s of both types; the type
/// names are derived from the same types and carried only so diagnostics
/// (most importantly the handler-not-found error) can name the pair without
/// the caller inspecting dispatcher internals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerKey {
    request: TypeId,
    response: TypeId,
    request_name: &'static str,
    response_name: &'static str,
}

impl HandlerKey {
    /// Compute the key for a request type.
    ///
    /// The response side comes from the request's declared `Response`
    /// associated type, so a key can never pair a request with a response
    /// type other than the one its contract names.
    pub fn of<R: Request>() -> Self {
        Self {
            request: TypeId::of::<R>(),
            response: TypeId::of::<R::Response>(),
            request_name: type_name::<R>(),
            response_name: type_name::<R::Response>(),
        }
    }

    /// Name of the request type, as reported by the compiler.
    #[inline]
    pub fn request_name(&self) -> &'static str {
        self.request_name
    }

    /// Name of the response type, as reported by the compiler.
    #[inline]
    pub fn response_name(&self) -> &'static str {
        self.response_name
    }
}

impl fmt::Display for HandlerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.request_name, self.response_name)
    }
}
