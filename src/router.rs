use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::db::BooksStorage;
use crate::handlers::books::{donate_handler, homepage_handler, list_books_handler};

/// Shared request state: the store handle injected into every handler.
#[derive(Clone)]
pub struct EstanteState {
    pub storage: BooksStorage,
}

impl EstanteState {
    pub fn new(storage: BooksStorage) -> Self {
        Self { storage }
    }
}

/// Build the application router with all routes and middleware.
pub fn estante_router(state: EstanteState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(homepage_handler))
        .route("/doar", post(donate_handler))
        .route("/livros", get(list_books_handler))
        .layer(cors)
        .with_state(state)
}
