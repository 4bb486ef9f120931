// Handlers module

pub mod authors;
pub mod books;

pub use authors::{
    create_author_handler, delete_author_handler, get_author_handler, list_authors_handler,
    update_author_handler,
};
pub use books::{
    create_book_handler, delete_book_handler, get_book_handler, list_books_handler,
    update_book_handler,
};

use warp::http::StatusCode;

use crate::library_db::Error;
use crate::models::ErrorBody;

/// Map a library store error onto a status code plus `{error}` JSON body
///
/// NotFound -> 404, Validation -> 400, Constraint -> 409, everything else is
/// a storage failure and answers 500.
pub(crate) fn error_reply(err: Error) -> warp::reply::WithStatus<warp::reply::Json> {
    let status = match err {
        Error::NotFound { .. } => StatusCode::NOT_FOUND,
        Error::Validation(_) => StatusCode::BAD_REQUEST,
        Error::Constraint(_) => StatusCode::CONFLICT,
        Error::Connection(_) | Error::Database(_) | Error::Pool(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "library store request failed");
    }

    warp::reply::with_status(
        warp::reply::json(&ErrorBody {
            error: err.to_string(),
        }),
        status,
    )
}
