use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// A persisted author row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Generated primary key, immutable once assigned
    pub id: i32,

    /// Author name (duplicates permitted)
    pub name: String,
}

impl Author {
    pub(crate) fn from_row(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            name: row.get("name"),
        }
    }
}

/// A persisted book row
///
/// `author_id` always references an existing author; the storage layer
/// rejects writes that would leave it dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Generated primary key, immutable once assigned
    pub id: i32,

    /// Book title (duplicates permitted)
    pub title: String,

    /// Foreign key to `author.id`
    pub author_id: i32,
}

impl Book {
    pub(crate) fn from_row(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            title: row.get("title"),
            author_id: row.get("author_id"),
        }
    }
}
