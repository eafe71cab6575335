//! SQL DDL for initializing the catalog storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT (never reused across deletions)
/// - The four donation fields as NOT NULL text, mirroring the handler-level
///   validation as a storage-level constraint
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS livros (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    titulo TEXT NOT NULL,
    categoria TEXT NOT NULL,
    autor TEXT NOT NULL,
    imagem_url TEXT NOT NULL
);
"#;
