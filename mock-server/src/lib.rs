use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

pub const LIST_PATH: &str = "/api/shopping-list";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: Uuid,
    pub description: String,
    pub priority: u32,
}

#[derive(Deserialize)]
pub struct NewShoppingListItem {
    pub description: String,
    pub priority: u32,
}

pub type Db = Arc<RwLock<HashMap<Uuid, ShoppingListItem>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route(LIST_PATH, get(list_items).post(add_item))
        .route(&format!("{LIST_PATH}/{{id}}"), delete(delete_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<ShoppingListItem>> {
    let items = db.read().await;
    Json(items.values().cloned().collect())
}

async fn add_item(State(db): State<Db>, Json(input): Json<NewShoppingListItem>) -> StatusCode {
    let item = ShoppingListItem {
        id: Uuid::new_v4(),
        description: input.description,
        priority: input.priority,
    };
    info!(id = %item.id, priority = item.priority, "item added");
    db.write().await.insert(item.id, item);
    StatusCode::CREATED
}

async fn delete_item(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut items = db.write().await;
    let removed = items.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    info!(id = %removed.id, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}
