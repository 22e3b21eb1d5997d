//! Error types for the shopping list API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because deleting an item that another
//! session already removed is the one failure callers can reason about. All
//! other non-2xx responses land in `HttpError` with the raw status code and
//! body. `Network` covers transports that never produced a response.

use thiserror::Error;

/// Errors returned by `ShoppingListClient` parse methods and transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport failed before a response was received.
    #[error("network error: {0}")]
    Network(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
