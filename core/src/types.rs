//! Domain DTOs for the shopping list API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single shopping list entry as stored by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoppingListItem {
    pub id: Uuid,
    pub description: String,
    pub priority: u32,
}

/// Request payload for adding an item. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewShoppingListItem {
    pub description: String,
    pub priority: u32,
}
