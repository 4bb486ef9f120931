pub mod authors;
pub mod books;

pub use authors::{create_author, delete_author, get_author, list_authors, update_author};
pub use books::{create_book, delete_book, get_book, list_books, update_book};
