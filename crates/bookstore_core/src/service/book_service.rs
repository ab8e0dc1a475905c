//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide the entry points the interactive shell calls.
//! - Sequence the store initializer before inserts.
//! - Own the look-up, confirm, delete ordering for removals.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - A delete confirmation is requested only for a record that exists.

use crate::model::book::{Book, BookDraft, BookId};
use crate::repo::book_repo::{BookRepository, RepoError, RepoResult};
use log::info;

/// Result of a confirmed-delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No record carries the id; no confirmation was requested.
    NotFound(BookId),
    /// The record was removed.
    Deleted(Book),
    /// The caller declined; the record is unchanged.
    Cancelled(Book),
}

/// Use-case service wrapper for catalog operations.
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Existence guard for read/update/delete/search workflows.
    ///
    /// Returns `false` both when the table is missing and when the seed
    /// record is absent.
    pub fn has_data(&self) -> RepoResult<bool> {
        Ok(self.repo.store_state()?.has_data())
    }

    /// Initializes the store if needed, then inserts the draft.
    pub fn create_book(&self, draft: &BookDraft) -> RepoResult<BookId> {
        self.repo.initialize_store()?;
        self.repo.create_book(draft)
    }

    pub fn find_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        self.repo.get_book(id)
    }

    pub fn list_books(&self) -> RepoResult<Vec<Book>> {
        self.repo.list_books()
    }

    /// Overwrites all mutable fields. Callers look the record up first;
    /// a missing id is silently ignored.
    pub fn update_book(&self, id: BookId, draft: &BookDraft) -> RepoResult<()> {
        self.repo.update_book(id, draft)
    }

    /// Looks the record up, asks `confirm` and deletes on approval.
    ///
    /// `confirm` runs only when the record exists. Its error type lets the
    /// caller surface prompt I/O failures through the same result.
    pub fn delete_book<F, E>(&self, id: BookId, confirm: F) -> Result<DeleteOutcome, E>
    where
        F: FnOnce(&Book) -> Result<bool, E>,
        E: From<RepoError>,
    {
        let Some(book) = self.repo.get_book(id)? else {
            return Ok(DeleteOutcome::NotFound(id));
        };

        if !confirm(&book)? {
            info!("event=book_delete module=service status=cancelled book_id={id}");
            return Ok(DeleteOutcome::Cancelled(book));
        }

        match self.repo.delete_book(id) {
            Ok(()) => Ok(DeleteOutcome::Deleted(book)),
            Err(RepoError::NotFound(id)) => Ok(DeleteOutcome::NotFound(id)),
            Err(err) => Err(err.into()),
        }
    }
}
