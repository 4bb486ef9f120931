use deadpool_postgres::Pool;

use crate::library_db::error::{Error, Result};
use crate::library_db::types::Author;

/// Retrieve all authors in primary-key order
///
/// Returns an empty list (not an error) when no authors exist.
pub async fn list_authors(pool: &Pool) -> Result<Vec<Author>> {
    let conn = pool.get().await?;

    let rows = conn
        .query("SELECT id, name FROM author ORDER BY id", &[])
        .await?;

    Ok(rows.iter().map(Author::from_row).collect())
}

/// Retrieve a single author by id
///
/// # Errors
///
/// * `Error::NotFound` - No author row has the given id
pub async fn get_author(pool: &Pool, id: i32) -> Result<Author> {
    let conn = pool.get().await?;

    let row = conn
        .query_opt("SELECT id, name FROM author WHERE id = $1", &[&id])
        .await?;

    match row {
        Some(row) => Ok(Author::from_row(&row)),
        None => Err(Error::NotFound {
            entity: "author",
            id,
        }),
    }
}

/// Insert a new author and return it with its generated id
pub async fn create_author(pool: &Pool, name: &str) -> Result<Author> {
    let conn = pool.get().await?;

    let row = conn
        .query_one(
            "INSERT INTO author (name) VALUES ($1) RETURNING id, name",
            &[&name],
        )
        .await?;

    Ok(Author::from_row(&row))
}

/// Replace an author's name in place and return the updated row
///
/// The `RETURNING` clause makes the update and the existence check a single
/// statement: no row back means no such author.
pub async fn update_author(pool: &Pool, id: i32, name: &str) -> Result<Author> {
    let conn = pool.get().await?;

    let row = conn
        .query_opt(
            "UPDATE author SET name = $2 WHERE id = $1 RETURNING id, name",
            &[&id, &name],
        )
        .await?;

    match row {
        Some(row) => Ok(Author::from_row(&row)),
        None => Err(Error::NotFound {
            entity: "author",
            id,
        }),
    }
}

/// Remove an author by id
///
/// # Errors
///
/// * `Error::NotFound` - No author row has the given id
/// * `Error::Constraint` - The author still has books referencing it
pub async fn delete_author(pool: &Pool, id: i32) -> Result<()> {
    let conn = pool.get().await?;

    let deleted = conn
        .execute("DELETE FROM author WHERE id = $1", &[&id])
        .await?;

    if deleted == 0 {
        return Err(Error::NotFound {
            entity: "author",
            id,
        });
    }

    Ok(())
}
