//! Book model
//!
//! Represents catalog records and their loan state. A book is either on the
//! shelf (`loan == None`) or checked out (`loan == Some`), so the
//! availability invariant holds by construction: borrower and dates can
//! never be half-populated.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LibrisError, LibrisResult};
use crate::models::money::{Money, FINE_PER_DAY};

/// Fixed borrow period: due date is always this many days after borrowing
pub const BORROW_PERIOD_DAYS: i64 = 7;

/// An active loan on a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// Name of the current holder
    pub borrower: String,

    /// When the book was borrowed
    pub borrow_date: DateTime<Utc>,

    /// When the book is due back (`borrow_date + BORROW_PERIOD_DAYS`)
    pub due_date: DateTime<Utc>,
}

impl Loan {
    /// Start a new loan at the given instant
    pub fn new(borrower: impl Into<String>, borrow_date: DateTime<Utc>) -> Self {
        Self {
            borrower: borrower.into(),
            borrow_date,
            due_date: borrow_date + Duration::days(BORROW_PERIOD_DAYS),
        }
    }

    /// Number of whole days this loan is overdue at `now`
    ///
    /// Returning exactly on the due date is not overdue.
    pub fn overdue_days(&self, now: DateTime<Utc>) -> i64 {
        if now > self.due_date {
            (now - self.due_date).num_days()
        } else {
            0
        }
    }

    /// Fine owed if the book were returned at `now`
    pub fn fine_at(&self, now: DateTime<Utc>) -> Money {
        FINE_PER_DAY * self.overdue_days(now)
    }
}

/// A catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier; immutable for the life of the catalog
    pub isbn: String,

    /// Display title
    pub title: String,

    /// Display author
    pub author: String,

    /// Optional genre; shown as "N/A" when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Current loan, if the book is checked out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan: Option<Loan>,
}

impl Book {
    /// Create a new available book
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: Option<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            genre,
            loan: None,
        }
    }

    /// Whether the book is on the shelf
    pub fn is_available(&self) -> bool {
        self.loan.is_none()
    }

    /// Genre for display, with the "N/A" sentinel for missing values
    pub fn genre_display(&self) -> &str {
        self.genre.as_deref().unwrap_or("N/A")
    }

    /// Check the book out to a borrower at the given instant
    ///
    /// # Errors
    ///
    /// Returns `AlreadyBorrowed` if the book is checked out.
    pub fn check_out(
        &mut self,
        borrower: impl Into<String>,
        now: DateTime<Utc>,
    ) -> LibrisResult<&Loan> {
        if let Some(loan) = &self.loan {
            return Err(LibrisError::AlreadyBorrowed {
                isbn: self.isbn.clone(),
                borrower: loan.borrower.clone(),
            });
        }

        Ok(&*self.loan.insert(Loan::new(borrower, now)))
    }

    /// Check the book back in, clearing its loan
    ///
    /// Returns the cleared loan so the caller can compute the fine and log
    /// the borrower.
    ///
    /// # Errors
    ///
    /// Returns `NotBorrowed` if the book is on the shelf.
    pub fn check_in(&mut self) -> LibrisResult<Loan> {
        self.loan.take().ok_or_else(|| LibrisError::NotBorrowed {
            isbn: self.isbn.clone(),
        })
    }

    /// The value of a searchable field, with missing genre as empty string
    pub fn field_value(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Author => &self.author,
            SearchField::Genre => self.genre.as_deref().unwrap_or(""),
        }
    }

    /// Case-insensitive substring match on the given field
    pub fn matches(&self, field: SearchField, query: &str) -> bool {
        self.field_value(field)
            .to_lowercase()
            .contains(&query.to_lowercase())
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.isbn.trim().is_empty() {
            return Err(BookValidationError::EmptyIsbn);
        }
        if self.title.trim().is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        Ok(())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {})", self.title, self.author, self.isbn)
    }
}

/// Validation errors for books
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    EmptyIsbn,
    EmptyTitle,
    EmptyAuthor,
}

impl fmt::Display for BookValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyIsbn => write!(f, "ISBN cannot be empty"),
            Self::EmptyTitle => write!(f, "Title cannot be empty"),
            Self::EmptyAuthor => write!(f, "Author cannot be empty"),
        }
    }
}

impl std::error::Error for BookValidationError {}

/// Searchable book fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Author,
    Genre,
}

impl SearchField {
    /// Parse a search field from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "title" => Some(Self::Title),
            "author" => Some(Self::Author),
            "genre" => Some(Self::Genre),
            _ => None,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Author => write!(f, "author"),
            Self::Genre => write!(f, "genre"),
        }
    }
}
