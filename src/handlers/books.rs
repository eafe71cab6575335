use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde_json::json;
use tracing::info;

use crate::error::EstanteError;
use crate::middleware::donation::DonationPayload;
use crate::router::EstanteState;

pub async fn homepage_handler() -> Html<&'static str> {
    Html("<h3>Minha página usando Flask</h3>")
}

/// Register one donated book. Validation happens in the extractor; the
/// store assigns the id.
pub async fn donate_handler(
    State(state): State<EstanteState>,
    DonationPayload(book): DonationPayload,
) -> Result<impl IntoResponse, EstanteError> {
    let id = state.storage.insert(book).await?;
    info!(id, "book registered");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "mensagem": "Livro cadastrado com sucesso" })),
    ))
}

pub async fn list_books_handler(
    State(state): State<EstanteState>,
) -> Result<impl IntoResponse, EstanteError> {
    let books = state.storage.list_all().await?;
    Ok(Json(books))
}
