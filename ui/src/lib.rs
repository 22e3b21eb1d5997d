//! Shopping list front end.
//!
//! # Overview
//! [`ShoppingList`] is the root component: it holds the list, renders it
//! highest priority first, and turns input submissions and row clicks into
//! API calls followed by a full re-fetch. [`TextInput`] is the child that
//! owns the uncommitted line of text.
//!
//! # Design
//! - The API is injected into the root component; there is no global client.
//! - Actions run as `spawn_local` tasks on the caller's `LocalSet`; state is
//!   `Rc<RefCell<_>>` and never crosses threads.
//! - [`UreqTransport`] is the production transport.

pub mod app;
pub mod input;
pub mod transport;
pub mod view;

pub use app::ShoppingList;
pub use input::{TextInput, TextInputProps};
pub use transport::UreqTransport;
pub use view::View;

use shopping_core::{ShoppingListApi, Transport};

/// Builds the root component and activates it, which starts the first load.
/// Must be called inside a `tokio::task::LocalSet`.
pub fn mount<T: Transport + 'static>(api: ShoppingListApi<T>) -> ShoppingList<T> {
    let app = ShoppingList::new(api);
    app.mount();
    app
}
