//! Stateless HTTP request builder and response parser for the shopping list API.
//!
//! # Design
//! `ShoppingListClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! [`ShoppingListApi`](crate::api::ShoppingListApi) stitches the two halves
//! together around a transport.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewShoppingListItem, ShoppingListItem};

/// Path of the list endpoint, relative to the server origin.
pub const LIST_PATH: &str = "/api/shopping-list";

/// Synchronous, stateless client for the shopping list API.
#[derive(Debug, Clone)]
pub struct ShoppingListClient {
    base_url: String,
}

impl ShoppingListClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_fetch_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{LIST_PATH}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_add_item(&self, item: &NewShoppingListItem) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(item).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{LIST_PATH}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_item(&self, item: &ShoppingListItem) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}{LIST_PATH}/{}", self.base_url, item.id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_fetch_list(&self, response: HttpResponse) -> Result<Vec<ShoppingListItem>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// The server does not echo the stored item back; callers re-fetch to
    /// learn its id.
    pub fn parse_add_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
