//! # HTTP Layer
//!
//! Maps each route onto one [`TodoApi`] call and renders the result as JSON.
//! This is the only place that knows about status codes, headers or sockets.
//!
//! | Method | Path                           | Success            |
//! |--------|--------------------------------|--------------------|
//! | GET    | `/lists`                       | `[{id, name}]`     |
//! | POST   | `/lists`                       | created list       |
//! | GET    | `/lists/:id`                   | full list          |
//! | PUT    | `/lists/:id`                   | renamed list       |
//! | DELETE | `/lists/:id`                   | `{success: true}`  |
//! | POST   | `/lists/:id/todos`             | created todo       |
//! | PUT    | `/lists/:id/todos/:todo_id`    | updated todo       |
//! | DELETE | `/lists/:id/todos/:todo_id`    | `{success: true}`  |
//!
//! Each path also matches with a single trailing slash. Anything else
//! answers 404 `{"error": "Not found"}`.

use crate::api::TodoApi;
use crate::config::ServerConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::DocumentStore;
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::{get, post, put, MethodRouter};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

pub mod error;
pub mod handlers;
pub mod json;
pub mod middleware;

/// Shared application dependencies.
pub struct AppState<S: DocumentStore> {
    pub api: Arc<TodoApi<S>>,
}

impl<S: DocumentStore> AppState<S> {
    pub fn new(api: TodoApi<S>) -> Self {
        Self { api: Arc::new(api) }
    }
}

impl<S: DocumentStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

pub fn build_router<S: DocumentStore + 'static>(state: AppState<S>, body_limit: usize) -> Router {
    let router = Router::new();
    let router = route_lenient(
        router,
        "/lists",
        get(handlers::list_lists::<S>)
            .post(handlers::create_list::<S>)
            .fallback(handlers::not_found),
    );
    let router = route_lenient(
        router,
        "/lists/:id",
        get(handlers::get_list::<S>)
            .put(handlers::rename_list::<S>)
            .delete(handlers::delete_list::<S>)
            .fallback(handlers::not_found),
    );
    let router = route_lenient(
        router,
        "/lists/:id/todos",
        post(handlers::add_todo::<S>).fallback(handlers::not_found),
    );
    let router = route_lenient(
        router,
        "/lists/:id/todos/:todo_id",
        put(handlers::update_todo::<S>)
            .delete(handlers::delete_todo::<S>)
            .fallback(handlers::not_found),
    );

    router
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(from_fn(middleware::cors_middleware))
        .layer(from_fn(middleware::request_tracing_middleware))
        .with_state(state)
}

/// Register `method_router` at `path` and at `path` with a trailing slash,
/// so `/lists/` answers the same as `/lists`.
fn route_lenient<T>(router: Router<T>, path: &str, method_router: MethodRouter<T>) -> Router<T>
where
    T: Clone + Send + Sync + 'static,
{
    router
        .route(path, method_router.clone())
        .route(&format!("{path}/"), method_router)
}

/// Build the production facade for `config`, initializing the data file.
///
/// Fails if the data file exists but cannot be read or parsed; the server
/// must not start in that case.
pub fn init_api(config: &ServerConfig) -> Result<TodoApi<FileStore>> {
    let store = FileStore::new(&config.data_file);
    let doc = store.init()?;
    info!(
        path = %store.path().display(),
        lists = doc.lists.len(),
        "data file ready"
    );

    let api = TodoApi::new(store);
    Ok(if config.serialize_requests {
        api.serialized()
    } else {
        api
    })
}

/// Initialize storage, bind, and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let api = init_api(&config)?;
    let app = build_router(AppState::new(api), config.body_limit);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
