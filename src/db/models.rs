use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One catalog entry, exactly as stored and as serialized by the list
/// endpoint (field names match the wire format, no renames).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct BookRecord {
    pub id: i64,
    pub titulo: String,
    pub categoria: String,
    pub autor: String,
    pub imagem_url: String,
}

/// Validated field set accepted for insertion; `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub titulo: String,
    pub categoria: String,
    pub autor: String,
    pub imagem_url: String,
}
