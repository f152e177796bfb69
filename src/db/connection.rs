use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ServerError;

// Thread-local connection slot. Each astra worker thread gets its own.
thread_local! {
    static DB_CONN: RefCell<Option<(PathBuf, Connection)>> = const { RefCell::new(None) };
}

#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Provides the calling thread's connection to the closure, opening it on first use.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServerError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();

                // A thread may serve more than one Database (tests do); reopen on a path change.
                let stale = match slot.as_ref() {
                    Some((path, _)) => path != &self.path,
                    None => true,
                };
                if stale {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| ServerError::DbError(format!("Open DB failed: {e}")))?;
                    register_functions(&conn)
                        .map_err(|e| ServerError::DbError(format!("Register functions failed: {e}")))?;
                    tracing::debug!(path = %self.path.display(), "opened sqlite connection");
                    *slot = Some((self.path.clone(), conn));
                }

                match slot.as_mut() {
                    Some((_, conn)) => f(conn),
                    None => Err(ServerError::InternalError),
                }
            })
            .map_err(|_| ServerError::InternalError)?
    }

    /// Cheap round trip used by the health check.
    pub fn ping(&self) -> Result<(), ServerError> {
        self.with_conn(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                .map_err(|e| ServerError::Unavailable(e.to_string()))?;
            Ok(())
        })
        .map_err(|e| match e {
            ServerError::DbError(msg) => ServerError::Unavailable(msg),
            other => other,
        })
    }
}

/// `fold_case(text)`: Unicode lowercase. SQLite's own `lower()` only folds ASCII.
fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "fold_case",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )
}

/// Initialize database from a SQL schema file
pub fn init_db(db: &Database, schema_path: impl AsRef<Path>) -> Result<(), ServerError> {
    let schema_path = schema_path.as_ref();
    let schema_sql = fs::read_to_string(schema_path)
        .map_err(|e| ServerError::DbError(format!("Failed to read schema file: {e}")))?;

    db.with_conn(|conn| {
        conn.execute_batch(&schema_sql)
            .map_err(|e| ServerError::DbError(format!("Failed to apply schema: {e}")))?;
        Ok(())
    })?;

    tracing::info!(schema = %schema_path.display(), "database initialized");
    Ok(())
}
