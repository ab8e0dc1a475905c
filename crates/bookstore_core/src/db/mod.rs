//! SQLite storage bootstrap and catalog schema entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the bookstore catalog.
//! - Create the `book` table and seed its id sequence on first use.
//! - Classify what the store currently holds (absent, empty, populated).
//!
//! # Invariants
//! - Opening a store never creates the `book` table; only the store
//!   initializer does.
//! - Schema version is tracked via `PRAGMA user_version`.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_store, open_store_in_memory};
pub use schema::{
    book_table_exists, ensure_book_table, inspect_store, StoreState, BOOK_TABLE, SCHEMA_VERSION,
    SEED_ID,
};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "catalog schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
