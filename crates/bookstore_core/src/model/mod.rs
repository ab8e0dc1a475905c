//! Catalog domain model.
//!
//! # Responsibility
//! - Define the book record and its create/update input shape.
//! - Validate user-supplied numeric fields before they reach storage.
//!
//! # Invariants
//! - Every persisted book is identified by a store-assigned `BookId`.
//! - Deletion is permanent; ids of deleted books are never reissued.

pub mod book;
