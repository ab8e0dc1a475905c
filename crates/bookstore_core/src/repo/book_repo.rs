//! Book repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `book` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Each operation runs one statement in autocommit mode; writes are
//!   committed before the call returns.
//! - Reads reject invalid persisted state (negative `qty`) instead of
//!   masking it.
//! - A store whose table was never created reads as empty: lookups return
//!   `None`, listings are empty, updates are no-ops and deletes `NotFound`.

use crate::db::{book_table_exists, ensure_book_table, inspect_store, DbError, StoreState};
use crate::model::book::{Book, BookDraft, BookId};
use log::{debug, info, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const BOOK_SELECT_SQL: &str = "SELECT id, title, author, qty FROM book";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for catalog persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(BookId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "book not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted book data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for catalog operations.
pub trait BookRepository {
    /// Creates the table and seeds the id sequence if needed.
    fn initialize_store(&self) -> RepoResult<()>;
    /// Classifies the store as absent, empty or populated.
    fn store_state(&self) -> RepoResult<StoreState>;
    /// Inserts a new row and returns the store-assigned id.
    fn create_book(&self, draft: &BookDraft) -> RepoResult<BookId>;
    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>>;
    /// Returns every current record in id order.
    fn list_books(&self) -> RepoResult<Vec<Book>>;
    /// Overwrites title, author and qty. A missing id is a no-op.
    fn update_book(&self, id: BookId, draft: &BookDraft) -> RepoResult<()>;
    /// Permanently removes the row. Returns `NotFound` for a missing id.
    fn delete_book(&self, id: BookId) -> RepoResult<()>;
}

/// SQLite-backed book repository.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn table_missing(&self, event: &str) -> RepoResult<bool> {
        if book_table_exists(self.conn)? {
            return Ok(false);
        }
        debug!("event={event} module=repo status=skip reason=table_absent");
        Ok(true)
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn initialize_store(&self) -> RepoResult<()> {
        ensure_book_table(self.conn)?;
        Ok(())
    }

    fn store_state(&self) -> RepoResult<StoreState> {
        Ok(inspect_store(self.conn)?)
    }

    fn create_book(&self, draft: &BookDraft) -> RepoResult<BookId> {
        self.conn.execute(
            "INSERT INTO book (title, author, qty) VALUES (?1, ?2, ?3);",
            params![draft.title.as_str(), draft.author.as_str(), draft.qty],
        )?;

        let id = BookId(self.conn.last_insert_rowid());
        info!("event=book_create module=repo status=ok book_id={id}");
        Ok(id)
    }

    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        if self.table_missing("book_get")? {
            return Ok(None);
        }
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} WHERE id = ?1;"))?;
        let found = stmt
            .query_row([id.get()], |row| Ok(parse_book_row(row)))
            .optional()?
            .transpose()?;

        debug!(
            "event=book_get module=repo status=ok book_id={id} found={}",
            found.is_some()
        );
        Ok(found)
    }

    fn list_books(&self) -> RepoResult<Vec<Book>> {
        if self.table_missing("book_list")? {
            return Ok(Vec::new());
        }
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut books = Vec::new();

        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        debug!("event=book_list module=repo status=ok count={}", books.len());
        Ok(books)
    }

    fn update_book(&self, id: BookId, draft: &BookDraft) -> RepoResult<()> {
        if self.table_missing("book_update")? {
            return Ok(());
        }
        let changed = self.conn.execute(
            "UPDATE book SET title = ?1, author = ?2, qty = ?3 WHERE id = ?4;",
            params![
                draft.title.as_str(),
                draft.author.as_str(),
                draft.qty,
                id.get()
            ],
        )?;

        if changed == 0 {
            warn!("event=book_update module=repo status=skip reason=not_found book_id={id}");
        } else {
            info!("event=book_update module=repo status=ok book_id={id}");
        }
        Ok(())
    }

    fn delete_book(&self, id: BookId) -> RepoResult<()> {
        if self.table_missing("book_delete")? {
            return Err(RepoError::NotFound(id));
        }
        let changed = self
            .conn
            .execute("DELETE FROM book WHERE id = ?1;", [id.get()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        info!("event=book_delete module=repo status=ok book_id={id}");
        Ok(())
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    let id = BookId(row.get("id")?);
    let raw_qty: i64 = row.get("qty")?;
    let qty = u32::try_from(raw_qty).map_err(|_| {
        RepoError::InvalidData(format!("invalid qty value `{raw_qty}` in book.qty for id {id}"))
    })?;

    Ok(Book {
        id,
        title: row.get::<_, Option<String>>("title")?.unwrap_or_default(),
        author: row.get::<_, Option<String>>("author")?.unwrap_or_default(),
        qty,
    })
}
