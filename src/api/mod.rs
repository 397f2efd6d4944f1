pub mod health;
pub mod items;
pub mod lists;

use crate::db::TodoStore;
use axum::{
    http::Uri,
    response::Redirect,
    routing::{any, get},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }
}

/// Body returned by the delete endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Any origin, method and header, with credentials.
///
/// `Any` cannot be combined with credentials, so request values are mirrored instead.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Send a collection or item path missing its trailing slash to the canonical
/// path with a 307, keeping the query string.
async fn redirect_with_slash(uri: Uri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("{}/?{}", uri.path(), query),
        None => format!("{}/", uri.path()),
    };
    Redirect::temporary(&target)
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/items/", get(items::list_items).post(items::create_item))
        .route(
            "/items/:id/",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .route("/lists/", get(lists::list_lists).post(lists::create_list))
        .route(
            "/lists/:id/",
            get(lists::get_list)
                .put(lists::update_list)
                .delete(lists::delete_list),
        )
        .route("/items", any(redirect_with_slash))
        .route("/items/:id", any(redirect_with_slash))
        .route("/lists", any(redirect_with_slash))
        .route("/lists/:id", any(redirect_with_slash))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
