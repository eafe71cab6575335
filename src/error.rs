use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum EstanteError {
    #[error("all required fields must be present and non-empty")]
    MissingFields,

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for EstanteError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            EstanteError::MissingFields => (
                StatusCode::BAD_REQUEST,
                ApiErro {
                    erro: "Todos os campos são obrigatórios".to_string(),
                },
            ),
            EstanteError::MalformedBody(_) => (
                StatusCode::BAD_REQUEST,
                ApiErro {
                    erro: "Corpo da requisição inválido".to_string(),
                },
            ),
            EstanteError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErro {
                    erro: "Erro interno no servidor".to_string(),
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// Standardized API error response body, `{"erro": "..."}` on the wire.
#[derive(Serialize)]
pub struct ApiErro {
    pub erro: String,
}
