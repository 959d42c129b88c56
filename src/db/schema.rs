use anyhow::{Context, Result};
use log::info;
use rusqlite::{params, Connection};

use super::Store;
use crate::models::SEED_BOOKS;

/// What `bootstrap` found when it looked for the `books` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bootstrap {
    /// The table was missing and has just been created.
    Created,
    /// The table already existed; the usual case on every run after the first.
    AlreadyPresent,
}

/// Report whether a table named `name` exists. Asking `sqlite_master` up
/// front lets `bootstrap` tell a first run from a later one without issuing a
/// `CREATE TABLE` that is expected to fail.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
        params![name],
        |row| row.get(0),
    )
    .with_context(|| format!("failed to look up table `{name}`"))
}

/// Ensure the `books` table exists and holds the sample inventory. Safe to run
/// any number of times: existing rows with a seed id are never touched, even
/// if the operator has edited them since.
///
/// The table is created in its own commit; the five seed inserts share a
/// second one, so a half-seeded table is never left behind. The returned
/// [`Bootstrap`] tells the caller whether this run created the table.
pub fn bootstrap(store: &mut Store) -> Result<Bootstrap> {
    let outcome = if table_exists(store.conn(), "books")? {
        Bootstrap::AlreadyPresent
    } else {
        store.write(|tx| {
            tx.execute(
                "CREATE TABLE books (
                    id INTEGER PRIMARY KEY,
                    title TEXT,
                    author TEXT,
                    qty INTEGER,
                    UNIQUE(id)
                )",
                [],
            )
            .context("failed to create books table")?;
            Ok(())
        })?;
        Bootstrap::Created
    };

    let seeded = store.write(|tx| {
        let mut stmt = tx
            .prepare("INSERT OR IGNORE INTO books (id, title, author, qty) VALUES (?1, ?2, ?3, ?4)")
            .context("failed to prepare seed insert")?;
        let mut inserted = 0;
        for (id, title, author, qty) in SEED_BOOKS {
            inserted += stmt
                .execute(params![id, title, author, qty])
                .with_context(|| format!("failed to seed book {id}"))?;
        }
        Ok(inserted)
    })?;

    info!("event=schema_bootstrap module=db status=ok outcome={outcome:?} seeded={seeded}");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fetch_books;

    #[test]
    fn second_bootstrap_reports_existing_table() {
        let mut store = Store::open_in_memory().unwrap();
        assert_eq!(bootstrap(&mut store).unwrap(), Bootstrap::Created);
        assert_eq!(bootstrap(&mut store).unwrap(), Bootstrap::AlreadyPresent);
        assert_eq!(fetch_books(store.conn()).unwrap().len(), SEED_BOOKS.len());
    }

    #[test]
    fn reseeding_restores_only_missing_rows() {
        let mut store = Store::open_in_memory().unwrap();
        bootstrap(&mut store).unwrap();
        store
            .conn()
            .execute("UPDATE books SET qty = 99 WHERE id = 3001", [])
            .unwrap();
        store
            .conn()
            .execute("DELETE FROM books WHERE id = 3005", [])
            .unwrap();

        bootstrap(&mut store).unwrap();

        let books = fetch_books(store.conn()).unwrap();
        assert_eq!(books.len(), 5);
        let first = books.iter().find(|b| b.id == 3001).unwrap();
        assert_eq!(first.qty, 99);
        assert!(books.iter().any(|b| b.id == 3005));
    }
}
