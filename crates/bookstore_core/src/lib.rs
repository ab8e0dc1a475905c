//! Core catalog logic for the bookstore inventory manager.
//! This crate owns persistence and business invariants; the terminal shell
//! lives in `bookstore_cli`.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_store, open_store_in_memory, DbError, StoreState, SEED_ID};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{
    is_digits_only, parse_book_id, parse_quantity, Book, BookDraft, BookId, BookValidationError,
};
pub use repo::book_repo::{BookRepository, RepoError, RepoResult, SqliteBookRepository};
pub use service::book_service::{BookService, DeleteOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
