// /books route handlers

use std::convert::Infallible;

use warp::http::StatusCode;

use crate::handlers::error_reply;
use crate::library_db::LibraryDbClient;
use crate::models::{BookInput, DeleteConfirmation};

pub async fn list_books_handler(client: LibraryDbClient) -> Result<impl warp::Reply, Infallible> {
    tracing::info!("GET /books");

    Ok(match client.list_books().await {
        Ok(books) => warp::reply::with_status(warp::reply::json(&books), StatusCode::OK),
        Err(err) => error_reply(err),
    })
}

pub async fn get_book_handler(
    id: i32,
    client: LibraryDbClient,
) -> Result<impl warp::Reply, Infallible> {
    tracing::info!("GET /books/{}", id);

    Ok(match client.get_book(id).await {
        Ok(book) => warp::reply::with_status(warp::reply::json(&book), StatusCode::OK),
        Err(err) => error_reply(err),
    })
}

pub async fn create_book_handler(
    input: BookInput,
    client: LibraryDbClient,
) -> Result<impl warp::Reply, Infallible> {
    tracing::info!(title = %input.title, author_id = input.author_id, "POST /books");

    Ok(match client.create_book(&input.title, input.author_id).await {
        Ok(book) => warp::reply::with_status(warp::reply::json(&book), StatusCode::CREATED),
        Err(err) => error_reply(err),
    })
}

pub async fn update_book_handler(
    id: i32,
    input: BookInput,
    client: LibraryDbClient,
) -> Result<impl warp::Reply, Infallible> {
    tracing::info!(title = %input.title, author_id = input.author_id, "PUT /books/{}", id);

    Ok(
        match client.update_book(id, &input.title, input.author_id).await {
            Ok(book) => warp::reply::with_status(warp::reply::json(&book), StatusCode::OK),
            Err(err) => error_reply(err),
        },
    )
}

pub async fn delete_book_handler(
    id: i32,
    client: LibraryDbClient,
) -> Result<impl warp::Reply, Infallible> {
    tracing::info!("DELETE /books/{}", id);

    Ok(match client.delete_book(id).await {
        Ok(()) => warp::reply::with_status(
            warp::reply::json(&DeleteConfirmation {
                message: "Book deleted".to_string(),
            }),
            StatusCode::OK,
        ),
        Err(err) => error_reply(err),
    })
}
