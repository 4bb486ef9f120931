// Route definitions and handlers

use std::convert::Infallible;

use warp::http::StatusCode;
use warp::Filter;

use crate::handlers;
use crate::library_db::LibraryDbClient;
use crate::models::ErrorBody;

/// Hand the store client to a filter chain
fn with_client(
    client: LibraryDbClient,
) -> impl Filter<Extract = (LibraryDbClient,), Error = Infallible> + Clone {
    warp::any().map(move || client.clone())
}

pub fn configure_routes(
    client: LibraryDbClient,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    // GET /authors
    let list_authors = warp::path("authors")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_client(client.clone()))
        .and_then(handlers::list_authors_handler);

    // GET /authors/{id}
    let get_author = warp::path("authors")
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::get())
        .and(with_client(client.clone()))
        .and_then(handlers::get_author_handler);

    // POST /authors
    let create_author = warp::path("authors")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_client(client.clone()))
        .and_then(handlers::create_author_handler);

    // PUT /authors/{id}
    let update_author = warp::path("authors")
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::put())
        .and(warp::body::json())
        .and(with_client(client.clone()))
        .and_then(handlers::update_author_handler);

    // DELETE /authors/{id}
    let delete_author = warp::path("authors")
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::delete())
        .and(with_client(client.clone()))
        .and_then(handlers::delete_author_handler);

    // GET /books
    let list_books = warp::path("books")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_client(client.clone()))
        .and_then(handlers::list_books_handler);

    // GET /books/{id}
    let get_book = warp::path("books")
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::get())
        .and(with_client(client.clone()))
        .and_then(handlers::get_book_handler);

    // POST /books
    let create_book = warp::path("books")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_client(client.clone()))
        .and_then(handlers::create_book_handler);

    // PUT /books/{id}
    let update_book = warp::path("books")
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::put())
        .and(warp::body::json())
        .and(with_client(client.clone()))
        .and_then(handlers::update_book_handler);

    // DELETE /books/{id}
    let delete_book = warp::path("books")
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::delete())
        .and(with_client(client))
        .and_then(handlers::delete_book_handler);

    // Combine routes
    list_authors
        .or(get_author)
        .or(create_author)
        .or(update_author)
        .or(delete_author)
        .or(list_books)
        .or(get_book)
        .or(create_book)
        .or(update_book)
        .or(delete_book)
        .recover(handle_rejection)
}

/// Convert warp rejections into the same `{error}` JSON bodies the handlers
/// produce, so a malformed body answers 400 instead of warp's default reply.
async fn handle_rejection(err: warp::Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "resource not found".to_string())
    } else if let Some(body_err) = err.find::<warp::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, body_err.to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "method not allowed".to_string(),
        )
    } else {
        tracing::error!(rejection = ?err, "unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".to_string(),
        )
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorBody { error: message }),
        status,
    ))
}
