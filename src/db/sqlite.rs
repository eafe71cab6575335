use crate::db::models::{BookRecord, NewBook};
use crate::db::schema::SQLITE_INIT;
use crate::error::EstanteError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

/// Handle over the catalog store. Cloneable; each operation checks a
/// connection out of the pool for one statement and releases it on every
/// exit path.
#[derive(Clone)]
pub struct BooksStorage {
    pool: SqlitePool,
}

impl BooksStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Open the store named by `database_url`, creating the backing file if
    /// absent, and ensure the schema exists.
    pub async fn connect(database_url: &str) -> Result<Self, EstanteError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize the schema by executing the bundled DDL. Idempotent:
    /// the DDL uses conditional creates, so re-running against an already
    /// initialized store leaves existing rows untouched.
    pub async fn init_schema(&self) -> Result<(), EstanteError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        info!("database schema initialized");
        Ok(())
    }

    /// Insert one record; the store assigns the id. Returns the new row id.
    pub async fn insert(&self, book: NewBook) -> Result<i64, EstanteError> {
        let result = sqlx::query(
            r#"INSERT INTO livros (titulo, categoria, autor, imagem_url)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(book.titulo)
        .bind(book.categoria)
        .bind(book.autor)
        .bind(book.imagem_url)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// All records, ordered by id so listing order matches insertion order.
    pub async fn list_all(&self) -> Result<Vec<BookRecord>, EstanteError> {
        let rows = sqlx::query_as::<_, BookRecord>(
            "SELECT id, titulo, categoria, autor, imagem_url FROM livros ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
