//! Schema bootstrap for the library store.
//!
//! The two tables are created at startup if absent; there is no migration
//! machinery. `book.author_id` carries a plain foreign key with no
//! `ON DELETE CASCADE`, so deleting an author who still has books is
//! rejected by the storage layer.

use deadpool_postgres::Pool;

use crate::library_db::error::Result;

const SCHEMA_DDL: &str = "
CREATE TABLE IF NOT EXISTS author (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS book (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    author_id INTEGER NOT NULL REFERENCES author (id)
);
";

/// Create the `author` and `book` tables if they do not exist
pub async fn ensure_schema(pool: &Pool) -> Result<()> {
    let conn = pool.get().await?;
    conn.batch_execute(SCHEMA_DDL).await?;
    Ok(())
}
