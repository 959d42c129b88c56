//! Persistence module split across logical submodules.

mod books;
mod connection;
mod schema;

pub use books::{
    book_exists, delete_book, fetch_book, fetch_book_by_key, fetch_books, insert_book, update_book,
};
pub use connection::Store;
pub use schema::{bootstrap, table_exists, Bootstrap};
