//! Async façade over [`ShoppingListClient`] and a [`Transport`].
//!
//! Each operation is one round-trip: build, execute, parse. Nothing is
//! retried and nothing is cached.

use tracing::debug;

use crate::client::ShoppingListClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{NewShoppingListItem, ShoppingListItem};

#[derive(Debug, Clone)]
pub struct ShoppingListApi<T> {
    client: ShoppingListClient,
    transport: T,
}

impl<T: Transport> ShoppingListApi<T> {
    pub fn new(client: ShoppingListClient, transport: T) -> Self {
        Self { client, transport }
    }

    #[cfg(test)]
    fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn fetch_list(&self) -> Result<Vec<ShoppingListItem>, ApiError> {
        let response = self.transport.execute(self.client.build_fetch_list()).await?;
        let items = self.client.parse_fetch_list(response)?;
        debug!(count = items.len(), "fetched shopping list");
        Ok(items)
    }

    pub async fn add_item(&self, item: &NewShoppingListItem) -> Result<(), ApiError> {
        let request = self.client.build_add_item(item)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_add_item(response)?;
        debug!(description = %item.description, priority = item.priority, "added item");
        Ok(())
    }

    pub async fn delete_item(&self, item: &ShoppingListItem) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_delete_item(item)).await?;
        self.client.parse_delete_item(response)?;
        debug!(id = %item.id, "deleted item");
        Ok(())
    }
}
