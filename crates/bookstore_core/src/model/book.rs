//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical catalog record (`Book`) and editable fields
//!   (`BookDraft`).
//! - Parse digit-only quantity and id input.
//!
//! # Invariants
//! - `qty` is never negative.
//! - Numeric input is ASCII digits only; signs, spaces and separators are
//!   rejected rather than coerced.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static DIGITS_ONLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid digits regex"));

/// Store-assigned catalog identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl BookId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Copies in stock.
    pub qty: u32,
}

impl Book {
    /// Returns the mutable fields as a draft, e.g. to seed an edit screen.
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            qty: self.qty,
        }
    }
}

/// Mutable book fields supplied on create and overwritten together on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub qty: u32,
}

impl BookDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>, qty: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            qty,
        }
    }

    /// Attaches a store-assigned id.
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            qty: self.qty,
        }
    }
}

/// Rejection reason for numeric user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    /// Input contains something other than ASCII digits, or is empty.
    NotNumeric(String),
    /// Input is all digits but does not fit the target type.
    OutOfRange(String),
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotNumeric(value) => write!(f, "expected digits only, got `{value}`"),
            Self::OutOfRange(value) => write!(f, "number `{value}` is out of range"),
        }
    }
}

impl Error for BookValidationError {}

/// Returns whether `value` consists solely of ASCII digits.
pub fn is_digits_only(value: &str) -> bool {
    DIGITS_ONLY_RE.is_match(value)
}

/// Parses a stock quantity from digit-only input.
pub fn parse_quantity(value: &str) -> Result<u32, BookValidationError> {
    parse_digits(value)
}

/// Parses a book id from digit-only input.
pub fn parse_book_id(value: &str) -> Result<BookId, BookValidationError> {
    parse_digits::<i64>(value).map(BookId)
}

fn parse_digits<T: std::str::FromStr>(value: &str) -> Result<T, BookValidationError> {
    if !is_digits_only(value) {
        return Err(BookValidationError::NotNumeric(value.to_string()));
    }
    value
        .parse::<T>()
        .map_err(|_| BookValidationError::OutOfRange(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_book_id, parse_quantity, BookDraft, BookId, BookValidationError};

    #[test]
    fn quantity_accepts_plain_digits() {
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity("0042").unwrap(), 42);
    }

    #[test]
    fn quantity_rejects_signs_spaces_and_empty() {
        for input in ["", "-1", "+3", " 5", "5 ", "1.5", "abc", "١٢"] {
            assert!(
                matches!(parse_quantity(input), Err(BookValidationError::NotNumeric(_))),
                "`{input}` should be rejected"
            );
        }
    }

    #[test]
    fn quantity_overflow_is_out_of_range() {
        let err = parse_quantity("99999999999").unwrap_err();
        assert_eq!(err, BookValidationError::OutOfRange("99999999999".to_string()));
    }

    #[test]
    fn book_id_parses_to_newtype() {
        assert_eq!(parse_book_id("3001").unwrap(), BookId(3001));
        assert_eq!(BookId(3001).to_string(), "3001");
    }

    #[test]
    fn draft_round_trips_through_book() {
        let draft = BookDraft::new("Dune", "Herbert", 5);
        let book = draft.clone().into_book(BookId(3001));
        assert_eq!(book.id.get(), 3001);
        assert_eq!(book.to_draft(), draft);
    }
}
