use anyhow::{Context, Result};
use log::info;
use rusqlite::{params, Connection, Error as SqlError, ErrorCode, OptionalExtension, Row};

use crate::error::BookError;
use crate::models::{Book, BookUpdate};

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        qty: row.get(3)?,
    })
}

/// Look up a single book by a validated id. Returns `None` rather than an
/// error when nothing matches so callers can print their own message.
pub fn fetch_book(conn: &Connection, id: i64) -> Result<Option<Book>> {
    conn.query_row(
        "SELECT id, title, author, qty FROM books WHERE id = ?1",
        params![id],
        book_from_row,
    )
    .optional()
    .with_context(|| format!("failed to load book {id}"))
}

/// Look up a book by the text the operator typed, without parsing it first.
/// SQLite converts numeric text such as `3001.0` or `3.001e3` to an integer
/// before comparing it with the key; text that is not a number never matches.
pub fn fetch_book_by_key(conn: &Connection, key: &str) -> Result<Option<Book>> {
    conn.query_row(
        "SELECT id, title, author, qty FROM books WHERE id = ?1",
        params![key],
        book_from_row,
    )
    .optional()
    .with_context(|| format!("failed to look up book `{key}`"))
}

/// Every stored book in whatever order SQLite returns them. There is no
/// `ORDER BY`; callers get no ordering guarantee.
pub fn fetch_books(conn: &Connection) -> Result<Vec<Book>> {
    let mut stmt = conn
        .prepare("SELECT id, title, author, qty FROM books")
        .context("failed to prepare book query")?;

    let books = stmt
        .query_map([], book_from_row)
        .context("failed to load books")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect books")?;

    Ok(books)
}

/// Existence check run before inserts and deletes. Checking up front
/// lets the create dialogue report a conflict without relying on the primary
/// key error, and keeps the delete dialogue from opening a write for nothing.
pub fn book_exists(conn: &Connection, id: i64) -> Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM books WHERE id = ?1)",
        params![id],
        |row| row.get(0),
    )
    .with_context(|| format!("failed to check for book {id}"))
}

/// Insert a validated book. Meant to run inside [`Store::write`] so the row is
/// committed immediately. A clash on the primary key is reported as
/// [`BookError::AlreadyExists`] rather than a raw SQLite error.
///
/// [`Store::write`]: crate::db::Store::write
pub fn insert_book(conn: &Connection, book: &Book) -> Result<()> {
    conn.execute(
        "INSERT INTO books (id, title, author, qty) VALUES (?1, ?2, ?3, ?4)",
        params![book.id, book.title, book.author, book.qty],
    )
    .map_err(|err| map_unique_constraint(err, book.id))?;

    info!("event=book_insert module=db status=ok id={}", book.id);
    Ok(())
}

/// Change one column of the book with `id`, leaving the other columns as they
/// were. Fails with [`BookError::NotFound`] when no row matched, so the caller
/// never reports a successful update for an unknown id; inside
/// [`Store::write`] that error also rolls the empty transaction back.
///
/// [`Store::write`]: crate::db::Store::write
pub fn update_book(conn: &Connection, id: i64, update: &BookUpdate) -> Result<()> {
    let updated = match update {
        BookUpdate::Title(title) => conn.execute(
            "UPDATE books SET title = ?1 WHERE id = ?2",
            params![title, id],
        ),
        BookUpdate::Author(author) => conn.execute(
            "UPDATE books SET author = ?1 WHERE id = ?2",
            params![author, id],
        ),
        BookUpdate::Quantity(qty) => conn.execute(
            "UPDATE books SET qty = ?1 WHERE id = ?2",
            params![qty, id],
        ),
    }
    .with_context(|| format!("failed to update book {id}"))?;

    if updated == 0 {
        return Err(BookError::NotFound(id).into());
    }

    info!(
        "event=book_update module=db status=ok id={id} column={}",
        update.column()
    );
    Ok(())
}

/// Remove the book with `id` for good; there is no soft delete. Fails with
/// [`BookError::NotFound`] when no row matched.
pub fn delete_book(conn: &Connection, id: i64) -> Result<()> {
    let deleted = conn
        .execute("DELETE FROM books WHERE id = ?1", params![id])
        .with_context(|| format!("failed to delete book {id}"))?;

    if deleted == 0 {
        return Err(BookError::NotFound(id).into());
    }

    info!("event=book_delete module=db status=ok id={id}");
    Ok(())
}

/// Turn a constraint violation into the conflict the operator understands.
/// The only constraint on `books` is the primary key, so any violation here
/// means the id is taken.
fn map_unique_constraint(err: SqlError, id: i64) -> anyhow::Error {
    if matches!(
        err.sqlite_error_code(),
        Some(ErrorCode::ConstraintViolation)
    ) {
        BookError::AlreadyExists(id).into()
    } else {
        anyhow::Error::new(err).context("failed to insert book")
    }
}
