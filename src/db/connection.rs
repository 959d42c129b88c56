use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{error, info};
use rusqlite::{Connection, Transaction};

/// The single open SQLite connection used by every operation. Reads borrow the
/// connection directly; writes go through [`Store::write`] so each one is
/// committed before control returns to the menu.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (creating if absent) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let started_at = Instant::now();

        match Connection::open(path) {
            Ok(conn) => {
                info!(
                    "event=db_open module=db status=ok mode=file path={} duration_ms={}",
                    path.display(),
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn })
            }
            Err(err) => {
                error!(
                    "event=db_open module=db status=error mode=file path={} error={}",
                    path.display(),
                    err
                );
                Err(err).with_context(|| {
                    format!("failed to open SQLite database `{}`", path.display())
                })
            }
        }
    }

    /// Open a private in-memory database. Nothing survives `close`.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
        info!("event=db_open module=db status=ok mode=memory");
        Ok(Self { conn })
    }

    /// Borrow the connection for read-only queries.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Run `f` inside a transaction and commit it. Every mutating operation
    /// goes through here, so each one is durable as soon as it returns. If `f`
    /// fails the transaction is rolled back when it drops, so no partial write
    /// survives and the error reaches the caller untouched (a `BookError`
    /// stays downcastable).
    pub fn write<T>(&mut self, f: impl FnOnce(&Transaction<'_>) -> Result<T>) -> Result<T> {
        let tx = self
            .conn
            .transaction()
            .context("failed to begin transaction")?;
        let value = f(&tx)?;
        tx.commit().context("failed to commit transaction")?;
        Ok(value)
    }

    /// Close the connection, surfacing any error SQLite reports while doing so.
    pub fn close(self) -> Result<()> {
        match self.conn.close() {
            Ok(()) => {
                info!("event=db_close module=db status=ok");
                Ok(())
            }
            Err((_, err)) => {
                error!("event=db_close module=db status=error error={err}");
                Err(err).context("failed to close SQLite database")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_write_is_rolled_back() {
        let mut store = Store::open_in_memory().unwrap();
        store
            .conn()
            .execute("CREATE TABLE t (v INTEGER)", [])
            .unwrap();

        let result: Result<()> = store.write(|tx| {
            tx.execute("INSERT INTO t (v) VALUES (1)", [])?;
            anyhow::bail!("abort")
        });
        assert!(result.is_err());

        let count: i64 = store
            .conn()
            .query_row("SELECT COUNT(*) FROM t", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn open_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.db");
        let store = Store::open(&path).unwrap();
        store.close().unwrap();
        assert!(path.exists());
    }
}
