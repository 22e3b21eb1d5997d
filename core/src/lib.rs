//! API client core for the shopping list service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host supplies a
//! [`Transport`]; [`ShoppingListApi`] runs the round-trips asynchronously.
//!
//! # Design
//! - `ShoppingListClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - The API is a value the caller constructs and passes around; tests swap
//!   in a fake transport.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod parse;
pub mod types;

pub use api::ShoppingListApi;
pub use client::{ShoppingListClient, LIST_PATH};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use parse::{parse_item, PRIORITY_MARKER};
pub use types::{NewShoppingListItem, ShoppingListItem};
