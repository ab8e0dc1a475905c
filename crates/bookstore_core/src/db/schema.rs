//! Catalog schema creation, id seeding and store inspection.
//!
//! # Responsibility
//! - Create the `book` table idempotently.
//! - Seed the AUTOINCREMENT sequence so the first record receives [`SEED_ID`].
//! - Report whether the store is absent, empty or populated.
//!
//! # Invariants
//! - The sequence is seeded only when `sqlite_sequence` has no `book` row;
//!   an already-issued sequence is never rewritten.
//! - Ids are never reused: AUTOINCREMENT keeps the highest issued id even
//!   after the row carrying it is deleted.

use crate::db::{DbError, DbResult};
use log::{debug, info};
use rusqlite::{Connection, OptionalExtension};

/// Catalog table name.
pub const BOOK_TABLE: &str = "book";

/// Identifier assigned to the first record of a freshly created catalog.
pub const SEED_ID: i64 = 3001;

/// Schema version mirrored into `PRAGMA user_version`.
pub const SCHEMA_VERSION: u32 = 1;

const CREATE_BOOK_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS book (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    author TEXT,
    qty INTEGER
);";

/// What the catalog store currently holds.
///
/// `Empty` and `Absent` behave identically for callers gating on data, but
/// are kept apart so diagnostics can tell a new file from a cleared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// The `book` table has not been created yet.
    Absent,
    /// The table exists but the seed record is not present.
    Empty,
    /// The seed record exists.
    Populated,
}

impl StoreState {
    /// Existence guard: whether read/update/delete workflows may proceed.
    pub fn has_data(self) -> bool {
        matches!(self, Self::Populated)
    }
}

/// Ensures the `book` table exists and its id sequence starts at [`SEED_ID`].
///
/// Safe to call before every write.
///
/// # Errors
/// - Returns [`DbError::UnsupportedSchemaVersion`] when the file was written
///   by a newer schema.
/// - Propagates SQLite failures; the transaction is rolled back on error.
pub fn ensure_book_table(conn: &Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    if current_version > SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: SCHEMA_VERSION,
        });
    }

    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(CREATE_BOOK_TABLE_SQL)?;

    let seq: Option<i64> = tx
        .query_row(
            "SELECT seq FROM sqlite_sequence WHERE name = ?1;",
            [BOOK_TABLE],
            |row| row.get(0),
        )
        .optional()?;

    match seq {
        Some(seq) => {
            debug!("event=store_init module=db status=skip reason=already_seeded seq={seq}");
        }
        None => {
            tx.execute(
                "INSERT INTO sqlite_sequence (name, seq) VALUES (?1, ?2);",
                rusqlite::params![BOOK_TABLE, SEED_ID - 1],
            )?;
            info!("event=store_init module=db status=ok seeded_id={SEED_ID}");
        }
    }

    if current_version < SCHEMA_VERSION {
        tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    }
    tx.commit()?;
    Ok(())
}

/// Classifies the store by checking for the table, then probing the seed record.
pub fn inspect_store(conn: &Connection) -> DbResult<StoreState> {
    let state = if !book_table_exists(conn)? {
        StoreState::Absent
    } else {
        let seed: Option<i64> = conn
            .query_row("SELECT id FROM book WHERE id = ?1;", [SEED_ID], |row| {
                row.get(0)
            })
            .optional()?;
        match seed {
            Some(_) => StoreState::Populated,
            None => StoreState::Empty,
        }
    };
    debug!("event=store_inspect module=db status=ok state={state:?}");
    Ok(state)
}

/// Whether the `book` table has been created.
pub fn book_table_exists(conn: &Connection) -> DbResult<bool> {
    table_exists(conn, BOOK_TABLE)
}

fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
