// /authors route handlers

use std::convert::Infallible;

use warp::http::StatusCode;

use crate::handlers::error_reply;
use crate::library_db::LibraryDbClient;
use crate::models::{AuthorInput, DeleteConfirmation};

pub async fn list_authors_handler(
    client: LibraryDbClient,
) -> Result<impl warp::Reply, Infallible> {
    tracing::info!("GET /authors");

    Ok(match client.list_authors().await {
        Ok(authors) => warp::reply::with_status(warp::reply::json(&authors), StatusCode::OK),
        Err(err) => error_reply(err),
    })
}

pub async fn get_author_handler(
    id: i32,
    client: LibraryDbClient,
) -> Result<impl warp::Reply, Infallible> {
    tracing::info!("GET /authors/{}", id);

    Ok(match client.get_author(id).await {
        Ok(author) => warp::reply::with_status(warp::reply::json(&author), StatusCode::OK),
        Err(err) => error_reply(err),
    })
}

pub async fn create_author_handler(
    input: AuthorInput,
    client: LibraryDbClient,
) -> Result<impl warp::Reply, Infallible> {
    tracing::info!(name = %input.name, "POST /authors");

    Ok(match client.create_author(&input.name).await {
        Ok(author) => warp::reply::with_status(warp::reply::json(&author), StatusCode::CREATED),
        Err(err) => error_reply(err),
    })
}

pub async fn update_author_handler(
    id: i32,
    input: AuthorInput,
    client: LibraryDbClient,
) -> Result<impl warp::Reply, Infallible> {
    tracing::info!(name = %input.name, "PUT /authors/{}", id);

    Ok(match client.update_author(id, &input.name).await {
        Ok(author) => warp::reply::with_status(warp::reply::json(&author), StatusCode::OK),
        Err(err) => error_reply(err),
    })
}

pub async fn delete_author_handler(
    id: i32,
    client: LibraryDbClient,
) -> Result<impl warp::Reply, Infallible> {
    tracing::info!("DELETE /authors/{}", id);

    Ok(match client.delete_author(id).await {
        Ok(()) => warp::reply::with_status(
            warp::reply::json(&DeleteConfirmation {
                message: "Author deleted".to_string(),
            }),
            StatusCode::OK,
        ),
        Err(err) => error_reply(err),
    })
}
