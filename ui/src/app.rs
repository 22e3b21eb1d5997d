//! Root component: owns the shopping list and wires the input to the API.
//!
//! Every mutation is followed by a full re-fetch; the fetched list replaces
//! local state wholesale. Actions run as `spawn_local` tasks, so the
//! component must live inside a `tokio::task::LocalSet`.

use std::cell::{Cell, RefCell};
use std::future::{poll_fn, Future};
use std::rc::Rc;

use shopping_core::{parse_item, ApiError, ShoppingListApi, ShoppingListItem, Transport};
use tokio::task::JoinSet;
use tracing::{error, warn};

use crate::input::{TextInput, TextInputProps};
use crate::view::View;

/// State reachable from spawned tasks.
struct Shared<T> {
    api: ShoppingListApi<T>,
    items: RefCell<Vec<ShoppingListItem>>,
    tasks: RefCell<JoinSet<()>>,
}

impl<T: Transport + 'static> Shared<T> {
    async fn resync(&self) -> Result<(), ApiError> {
        let items = self.api.fetch_list().await?;
        *self.items.borrow_mut() = items;
        Ok(())
    }

    /// Failures end the task and are logged; `items` is left as it was.
    fn spawn<Fut>(&self, action: &'static str, fut: Fut)
    where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let mut tasks = self.tasks.borrow_mut();
        while tasks.try_join_next().is_some() {}
        tasks.spawn_local(async move {
            if let Err(err) = fut.await {
                error!(action, error = %err, "shopping list action failed");
            }
        });
    }
}

pub struct ShoppingList<T: Transport + 'static> {
    shared: Rc<Shared<T>>,
    input: TextInput,
    mounted: Cell<bool>,
}

impl<T: Transport + 'static> ShoppingList<T> {
    pub fn new(api: ShoppingListApi<T>) -> Self {
        let shared = Rc::new(Shared {
            api,
            items: RefCell::new(Vec::new()),
            tasks: RefCell::new(JoinSet::new()),
        });

        let on_submit = {
            let shared = Rc::clone(&shared);
            move |text: String| {
                let item = parse_item(&text);
                let task = Rc::clone(&shared);
                shared.spawn("add", async move {
                    task.api.add_item(&item).await?;
                    task.resync().await
                });
            }
        };

        Self {
            shared,
            input: TextInput::new(TextInputProps {
                on_submit: Box::new(on_submit),
            }),
            mounted: Cell::new(false),
        }
    }

    /// First activation loads the list. Later calls do nothing.
    pub fn mount(&self) {
        if self.mounted.replace(true) {
            return;
        }
        let task = Rc::clone(&self.shared);
        self.shared.spawn("load", async move { task.resync().await });
    }

    /// Current state in server order.
    pub fn items(&self) -> Vec<ShoppingListItem> {
        self.shared.items.borrow().clone()
    }

    pub fn view(&self) -> View {
        View::new(&self.shared.items.borrow(), self.input.value())
    }

    pub fn input(&mut self) -> &mut TextInput {
        &mut self.input
    }

    /// Click handler for a rendered row: delete, then re-fetch.
    pub fn click(&self, item: &ShoppingListItem) {
        let item = item.clone();
        let task = Rc::clone(&self.shared);
        self.shared.spawn("delete", async move {
            task.api.delete_item(&item).await?;
            task.resync().await
        });
    }

    /// Waits for every action spawned so far, including ones spawned while
    /// waiting. Cancelling this future leaves the actions owned by the
    /// component.
    pub async fn settle(&self) {
        while let Some(joined) = poll_fn(|cx| self.shared.tasks.borrow_mut().poll_join_next(cx)).await {
            if let Err(err) = joined {
                warn!(error = %err, "shopping list task did not complete");
            }
        }
    }
}

impl<T: Transport + 'static> Drop for ShoppingList<T> {
    fn drop(&mut self) {
        // Task futures hold the shared state, so the set outlives the
        // component unless aborted here.
        self.shared.tasks.borrow_mut().abort_all();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use shopping_core::{
        HttpMethod, HttpRequest, HttpResponse, NewShoppingListItem, ShoppingListClient,
    };
    use tokio::task::LocalSet;
    use uuid::Uuid;

    use super::*;

    /// Emulates the list endpoint in memory.
    #[derive(Default)]
    struct FakeServer {
        items: RefCell<Vec<ShoppingListItem>>,
        log: RefCell<Vec<HttpRequest>>,
        fail_adds: Cell<bool>,
        fail_fetches: Cell<bool>,
        delay: Option<Duration>,
        served: Rc<Cell<usize>>,
    }

    impl FakeServer {
        fn with_items(items: Vec<ShoppingListItem>) -> Self {
            Self {
                items: RefCell::new(items),
                ..Self::default()
            }
        }

        fn methods(&self) -> Vec<HttpMethod> {
            self.log.borrow().iter().map(|r| r.method).collect()
        }

        fn reply(status: u16, body: String) -> Result<HttpResponse, ApiError> {
            Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body,
            })
        }
    }

    impl FakeServer {
        async fn handle(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.log.borrow_mut().push(request.clone());
            match self.delay {
                Some(delay) => tokio::time::sleep(delay).await,
                None => tokio::task::yield_now().await,
            }
            self.served.set(self.served.get() + 1);

            match request.method {
                HttpMethod::Get if self.fail_fetches.get() => {
                    Err(ApiError::Network("connection reset".to_string()))
                }
                HttpMethod::Get => Self::reply(200, serde_json::to_string(&*self.items.borrow()).unwrap()),
                HttpMethod::Post if self.fail_adds.get() => Self::reply(500, "db down".to_string()),
                HttpMethod::Post => {
                    let new: NewShoppingListItem = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
                    self.items.borrow_mut().push(ShoppingListItem {
                        id: Uuid::new_v4(),
                        description: new.description,
                        priority: new.priority,
                    });
                    Self::reply(201, String::new())
                }
                HttpMethod::Delete => {
                    let id: Uuid = request.path.rsplit('/').next().unwrap().parse().unwrap();
                    let mut items = self.items.borrow_mut();
                    let before = items.len();
                    items.retain(|i| i.id != id);
                    let status = if items.len() < before { 204 } else { 404 };
                    Self::reply(status, String::new())
                }
            }
        }
    }

    /// Lets a test keep its own handle on the server the app talks to.
    struct SharedServer(Rc<FakeServer>);

    #[async_trait(?Send)]
    impl Transport for SharedServer {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.0.handle(request).await
        }
    }

    fn item(n: u128, description: &str, priority: u32) -> ShoppingListItem {
        ShoppingListItem {
            id: Uuid::from_u128(n),
            description: description.to_string(),
            priority,
        }
    }

    fn app(server: FakeServer) -> (ShoppingList<SharedServer>, Rc<FakeServer>) {
        let server = Rc::new(server);
        let transport = SharedServer(Rc::clone(&server));
        let app = ShoppingList::new(ShoppingListApi::new(ShoppingListClient::new("http://shop.test"), transport));
        (app, server)
    }

    #[tokio::test]
    async fn mount_fetches_once() {
        LocalSet::new()
            .run_until(async {
                let (app, server) = app(FakeServer::with_items(vec![item(1, "Milk", 0)]));
                assert!(app.items().is_empty());

                app.mount();
                app.mount();
                app.settle().await;
                app.mount();
                app.settle().await;

                assert_eq!(server.methods(), vec![HttpMethod::Get]);
                assert_eq!(app.items(), vec![item(1, "Milk", 0)]);
            })
            .await;
    }

    #[tokio::test]
    async fn view_sorts_without_touching_state() {
        LocalSet::new()
            .run_until(async {
                let (app, _server) = app(FakeServer::with_items(vec![item(1, "Bread", 1), item(2, "Peaches", 3)]));
                app.mount();
                app.settle().await;

                let view = app.view();
                assert_eq!(view.heading, "Shopping List");
                assert_eq!(view.rows[0].priority, 3);
                assert_eq!(view.rows[1].priority, 1);
                assert_eq!(app.items()[0].description, "Bread");
            })
            .await;
    }

    #[tokio::test]
    async fn submit_adds_parsed_item_then_refetches() {
        LocalSet::new()
            .run_until(async {
                let (mut app, server) = app(FakeServer::default());
                app.mount();
                app.settle().await;

                app.input().change("Peaches!! 🍑");
                assert_eq!(app.view().input, "Peaches!! 🍑");
                app.input().submit();
                assert_eq!(app.input().value(), "");

                app.settle().await;

                assert_eq!(
                    server.methods(),
                    vec![HttpMethod::Get, HttpMethod::Post, HttpMethod::Get]
                );
                let sent: NewShoppingListItem =
                    serde_json::from_str(server.log.borrow()[1].body.as_deref().unwrap()).unwrap();
                assert_eq!(
                    sent,
                    NewShoppingListItem {
                        description: "Peaches 🍑".to_string(),
                        priority: 2,
                    }
                );
                assert_eq!(app.items(), *server.items.borrow());
                assert_eq!(app.view().rows[0].description, "Peaches 🍑");
            })
            .await;
    }

    #[tokio::test]
    async fn empty_submit_still_adds() {
        LocalSet::new()
            .run_until(async {
                let (mut app, _server) = app(FakeServer::default());
                app.input().submit();
                app.settle().await;

                let items = app.items();
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].description, "");
                assert_eq!(items[0].priority, 0);
            })
            .await;
    }

    #[tokio::test]
    async fn click_deletes_then_refetches() {
        LocalSet::new()
            .run_until(async {
                let (app, server) = app(FakeServer::with_items(vec![item(1, "Milk", 0), item(2, "Eggs", 2)]));
                app.mount();
                app.settle().await;

                let eggs = app.view().rows[0].clone();
                app.click(&eggs);
                app.settle().await;

                assert_eq!(
                    server.methods(),
                    vec![HttpMethod::Get, HttpMethod::Delete, HttpMethod::Get]
                );
                assert_eq!(app.items(), vec![item(1, "Milk", 0)]);
            })
            .await;
    }

    #[tokio::test]
    async fn state_is_replaced_by_refetch_not_merged() {
        LocalSet::new()
            .run_until(async {
                let (mut app, server) = app(FakeServer::with_items(vec![item(1, "Milk", 0)]));
                app.mount();
                app.settle().await;

                // Another client rewrites the list behind our back.
                *server.items.borrow_mut() = vec![item(9, "Cheese", 4)];

                app.input().change("Bread!");
                app.input().submit();
                app.settle().await;

                assert_eq!(app.items(), *server.items.borrow());
                assert!(app.items().iter().all(|i| i.id != Uuid::from_u128(1)));
                assert_eq!(app.items().len(), 2);
            })
            .await;
    }

    #[tokio::test]
    async fn failed_add_keeps_prior_items() {
        LocalSet::new()
            .run_until(async {
                let (mut app, server) = app(FakeServer::with_items(vec![item(1, "Milk", 0)]));
                app.mount();
                app.settle().await;

                server.fail_adds.set(true);
                app.input().change("Bread");
                app.input().submit();
                assert_eq!(app.input().value(), "");
                app.settle().await;

                assert_eq!(app.items(), vec![item(1, "Milk", 0)]);
                assert_eq!(server.methods(), vec![HttpMethod::Get, HttpMethod::Post]);
            })
            .await;
    }

    #[tokio::test]
    async fn failed_refetch_keeps_prior_items() {
        LocalSet::new()
            .run_until(async {
                let (app, server) = app(FakeServer::with_items(vec![item(1, "Milk", 0), item(2, "Jam", 1)]));
                app.mount();
                app.settle().await;

                server.fail_fetches.set(true);
                app.click(&item(2, "Jam", 1));
                app.settle().await;

                // The delete landed on the server, but the list was never re-read.
                assert_eq!(server.items.borrow().len(), 1);
                assert_eq!(app.items().len(), 2);
            })
            .await;
    }

    #[tokio::test]
    async fn failed_initial_load_leaves_list_empty() {
        LocalSet::new()
            .run_until(async {
                let server = FakeServer::with_items(vec![item(1, "Milk", 0)]);
                server.fail_fetches.set(true);
                let (app, _server) = app(server);
                app.mount();
                app.settle().await;

                assert!(app.items().is_empty());
                assert!(app.view().rows.is_empty());
            })
            .await;
    }

    #[tokio::test]
    async fn dropping_after_interrupted_settle_aborts_actions() {
        LocalSet::new()
            .run_until(async {
                let server = FakeServer {
                    delay: Some(Duration::from_millis(50)),
                    ..FakeServer::default()
                };
                let served = Rc::clone(&server.served);
                let (app, _server) = app(server);
                app.mount();
                let waited = tokio::time::timeout(Duration::from_millis(5), app.settle()).await;
                assert!(waited.is_err());
                drop(app);

                tokio::time::sleep(Duration::from_millis(150)).await;
                assert_eq!(served.get(), 0);
            })
            .await;
    }

    #[tokio::test]
    async fn dropping_aborts_in_flight_actions() {
        LocalSet::new()
            .run_until(async {
                let server = FakeServer {
                    delay: Some(Duration::from_millis(20)),
                    ..FakeServer::default()
                };
                let served = Rc::clone(&server.served);
                let (app, _server) = app(server);
                app.mount();
                tokio::task::yield_now().await;
                drop(app);

                tokio::time::sleep(Duration::from_millis(100)).await;
                assert_eq!(served.get(), 0);
            })
            .await;
    }
}
