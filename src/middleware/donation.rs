use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::Deserialize;

use crate::db::models::NewBook;
use crate::error::EstanteError;

/// Donation payload as it arrives on the wire. Every field is optional at
/// the parse boundary so a missing key, an explicit null and an empty
/// string all fall through the same validation path.
#[derive(Debug, Deserialize)]
pub struct DonationRequest {
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub autor: Option<String>,
    #[serde(default)]
    pub imagem_url: Option<String>,
}

impl DonationRequest {
    /// Promote to a `NewBook` once all four fields are present and non-empty.
    pub fn into_new_book(self) -> Result<NewBook, EstanteError> {
        match (self.titulo, self.categoria, self.autor, self.imagem_url) {
            (Some(titulo), Some(categoria), Some(autor), Some(imagem_url))
                if !titulo.is_empty()
                    && !categoria.is_empty()
                    && !autor.is_empty()
                    && !imagem_url.is_empty() =>
            {
                Ok(NewBook {
                    titulo,
                    categoria,
                    autor,
                    imagem_url,
                })
            }
            _ => Err(EstanteError::MissingFields),
        }
    }
}

/// Extractor for the submission endpoint: parses the JSON body and yields a
/// validated `NewBook`. A body that is not a JSON object rejects with
/// `MalformedBody`; missing or empty fields reject with `MissingFields`.
pub struct DonationPayload(pub NewBook);

impl<S> FromRequest<S> for DonationPayload
where
    S: Send + Sync,
{
    type Rejection = EstanteError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<DonationRequest>::from_request(req, state)
            .await
            .map_err(|rejection| EstanteError::MalformedBody(rejection.body_text()))?;
        Ok(DonationPayload(body.into_new_book()?))
    }
}
