use deadpool_postgres::Pool;

use crate::library_db::error::{Error, Result};
use crate::library_db::types::Book;

/// Retrieve all books in primary-key order
pub async fn list_books(pool: &Pool) -> Result<Vec<Book>> {
    let conn = pool.get().await?;

    let rows = conn
        .query("SELECT id, title, author_id FROM book ORDER BY id", &[])
        .await?;

    Ok(rows.iter().map(Book::from_row).collect())
}

/// Retrieve a single book by id
pub async fn get_book(pool: &Pool, id: i32) -> Result<Book> {
    let conn = pool.get().await?;

    let row = conn
        .query_opt(
            "SELECT id, title, author_id FROM book WHERE id = $1",
            &[&id],
        )
        .await?;

    match row {
        Some(row) => Ok(Book::from_row(&row)),
        None => Err(Error::NotFound { entity: "book", id }),
    }
}

/// Insert a new book and return it with its generated id
///
/// There is no application-level check that `author_id` exists; the foreign
/// key on the `book` table is the single point of enforcement, and a dangling
/// reference comes back as `Error::Constraint`.
pub async fn create_book(pool: &Pool, title: &str, author_id: i32) -> Result<Book> {
    let conn = pool.get().await?;

    let row = conn
        .query_one(
            "INSERT INTO book (title, author_id) VALUES ($1, $2) RETURNING id, title, author_id",
            &[&title, &author_id],
        )
        .await?;

    Ok(Book::from_row(&row))
}

/// Replace a book's title and author reference, returning the updated row
///
/// # Errors
///
/// * `Error::NotFound` - No book row has the given id
/// * `Error::Constraint` - `author_id` references no existing author
pub async fn update_book(pool: &Pool, id: i32, title: &str, author_id: i32) -> Result<Book> {
    let conn = pool.get().await?;

    let row = conn
        .query_opt(
            "UPDATE book SET title = $2, author_id = $3 WHERE id = $1 \
             RETURNING id, title, author_id",
            &[&id, &title, &author_id],
        )
        .await?;

    match row {
        Some(row) => Ok(Book::from_row(&row)),
        None => Err(Error::NotFound { entity: "book", id }),
    }
}

/// Remove a book by id
pub async fn delete_book(pool: &Pool, id: i32) -> Result<()> {
    let conn = pool.get().await?;

    let deleted = conn
        .execute("DELETE FROM book WHERE id = $1", &[&id])
        .await?;

    if deleted == 0 {
        return Err(Error::NotFound { entity: "book", id });
    }

    Ok(())
}
