//! Catalog service
//!
//! Business logic for the borrow/return lifecycle: availability checks,
//! due-date assignment, overdue-fine computation, persistence, and
//! transaction logging. All mutations follow the same shape: validate
//! against the current record, persist the updated catalog, then log.
//! Failures before the persist step leave both memory and disk untouched.

use chrono::{DateTime, Utc};

use crate::audit::TransactionLogger;
use crate::error::{LibrisError, LibrisResult};
use crate::models::{Book, Loan, Money, SearchField};
use crate::storage::Storage;

use super::clock::{Clock, SystemClock};

/// Service for catalog queries and the borrow/return lifecycle
pub struct CatalogService<'a> {
    storage: &'a Storage,
    logger: &'a TransactionLogger,
    clock: Box<dyn Clock>,
}

/// Result of a successful borrow, for display
#[derive(Debug, Clone)]
pub struct BorrowReceipt {
    /// The updated record, now checked out
    pub book: Book,
    /// When the book is due back
    pub due_date: DateTime<Utc>,
}

/// Result of a successful return, for display
#[derive(Debug, Clone)]
pub struct ReturnReceipt {
    /// The updated record, back on the shelf
    pub book: Book,
    /// Who held the loan, captured before it was cleared
    pub borrower: String,
    /// Whole days past the due date at return time
    pub overdue_days: i64,
    /// Fine owed: one day's rate per whole overdue day
    pub fine: Money,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service using wall-clock time
    pub fn new(storage: &'a Storage, logger: &'a TransactionLogger) -> Self {
        Self::with_clock(storage, logger, Box::new(SystemClock))
    }

    /// Create a catalog service with an injected time source
    pub fn with_clock(
        storage: &'a Storage,
        logger: &'a TransactionLogger,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            storage,
            logger,
            clock,
        }
    }

    /// All books, in stored order
    pub fn list(&self) -> LibrisResult<Vec<Book>> {
        self.storage.catalog.get_all()
    }

    /// Books whose `field` value contains `query`, case-insensitively
    ///
    /// An empty result is a valid answer, not an error.
    pub fn search(&self, query: &str, field: SearchField) -> LibrisResult<Vec<Book>> {
        let books = self.storage.catalog.get_all()?;
        Ok(books
            .into_iter()
            .filter(|b| b.matches(field, query))
            .collect())
    }

    /// Borrow a book: check it out, persist the catalog, log the transaction
    ///
    /// # Errors
    ///
    /// - `Validation` if the borrower name is empty
    /// - `NotFound` if no record has the given ISBN
    /// - `AlreadyBorrowed` if the book is checked out
    /// - `Storage` if persisting fails (in-memory state is rolled back)
    pub fn borrow(&self, isbn: &str, borrower: &str) -> LibrisResult<BorrowReceipt> {
        let borrower = borrower.trim();
        if borrower.is_empty() {
            return Err(LibrisError::Validation(
                "Borrower name cannot be empty".into(),
            ));
        }

        let mut book = self
            .storage
            .catalog
            .get(isbn)?
            .ok_or_else(|| LibrisError::book_not_found(isbn))?;

        let now = self.clock.now();
        let due_date = book.check_out(borrower, now)?.due_date;

        self.storage.catalog.update(book.clone())?;

        self.log_best_effort(
            &format!(
                "{} borrowed '{}' (ISBN: {}). Due date: {}",
                borrower,
                book.title,
                book.isbn,
                due_date.format("%Y-%m-%d")
            ),
            now,
        );

        Ok(BorrowReceipt { book, due_date })
    }

    /// Return a book: compute the fine, clear the loan, persist, log
    ///
    /// The fine is one day's rate per whole day past the due date; returning
    /// exactly on the due date costs nothing.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no record has the given ISBN
    /// - `NotBorrowed` if the book is on the shelf
    /// - `Storage` if persisting fails (in-memory state is rolled back)
    pub fn return_book(&self, isbn: &str) -> LibrisResult<ReturnReceipt> {
        let mut book = self
            .storage
            .catalog
            .get(isbn)?
            .ok_or_else(|| LibrisError::book_not_found(isbn))?;

        let now = self.clock.now();
        let loan: Loan = book.check_in()?;
        let overdue_days = loan.overdue_days(now);
        let fine = loan.fine_at(now);

        self.storage.catalog.update(book.clone())?;

        self.log_best_effort(
            &format!(
                "{} returned '{}' (ISBN: {}). Fine: {}",
                loan.borrower, book.title, book.isbn, fine
            ),
            now,
        );

        Ok(ReturnReceipt {
            book,
            borrower: loan.borrower,
            overdue_days,
            fine,
        })
    }

    /// Append a transaction line; the business operation has already
    /// succeeded, so a log failure is reported on stderr instead of
    /// propagated.
    fn log_best_effort(&self, message: &str, timestamp: DateTime<Utc>) {
        if let Err(err) = self.logger.record_at(message, timestamp) {
            eprintln!("Warning: failed to write transaction log: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LibrisPaths;
    use crate::services::clock::FixedClock;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    const SEED_ISBN: &str = "9788129135513";

    fn test_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn seeded_fixture() -> (TempDir, Storage, TransactionLogger) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibrisPaths::with_base_dir(temp_dir.path().to_path_buf());
        let logger = TransactionLogger::new(paths.transaction_log());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage, logger)
    }

    fn service_at<'a>(
        storage: &'a Storage,
        logger: &'a TransactionLogger,
        now: DateTime<Utc>,
    ) -> CatalogService<'a> {
        CatalogService::with_clock(storage, logger, Box::new(FixedClock(now)))
    }

    #[test]
    fn test_list_fresh_seed() {
        let (_temp, storage, logger) = seeded_fixture();
        let service = service_at(&storage, &logger, test_instant());

        let books = service.list().unwrap();
        assert_eq!(books.len(), 5);
        assert!(books.iter().all(|b| b.is_available()));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let (_temp, storage, logger) = seeded_fixture();
        let service = service_at(&storage, &logger, test_instant());

        let lower = service.search("bhagat", SearchField::Author).unwrap();
        assert_eq!(lower.len(), 2);
        assert!(lower.iter().all(|b| b.author == "Chetan Bhagat"));

        let upper = service.search("BHAGAT", SearchField::Author).unwrap();
        assert_eq!(upper.len(), 2);
    }

    #[test]
    fn test_search_no_match_is_empty_not_error() {
        let (_temp, storage, logger) = seeded_fixture();
        let service = service_at(&storage, &logger, test_instant());

        let results = service.search("tolkien", SearchField::Author).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_borrow_sets_loan_and_due_date() {
        let (_temp, storage, logger) = seeded_fixture();
        let now = test_instant();
        let service = service_at(&storage, &logger, now);

        let receipt = service.borrow(SEED_ISBN, "Alice").unwrap();
        assert_eq!(receipt.due_date, now + Duration::days(7));

        let loan = receipt.book.loan.as_ref().unwrap();
        assert_eq!(loan.borrower, "Alice");
        assert_eq!(loan.borrow_date, now);
        assert_eq!(loan.due_date, loan.borrow_date + Duration::days(7));

        // Persisted: a fresh load sees the loan
        let reloaded = storage.catalog.get(SEED_ISBN).unwrap().unwrap();
        assert!(!reloaded.is_available());
    }

    #[test]
    fn test_borrow_appends_log_line() {
        let (_temp, storage, logger) = seeded_fixture();
        let service = service_at(&storage, &logger, test_instant());

        service.borrow(SEED_ISBN, "Alice").unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("Alice borrowed 'The 3 Mistakes of My Life'"));
        assert!(entries[0].contains("ISBN: 9788129135513"));
        assert!(entries[0].contains("Due date: 2025-03-08"));
    }

    #[test]
    fn test_borrow_unknown_isbn_does_not_persist() {
        let (_temp, storage, logger) = seeded_fixture();
        let service = service_at(&storage, &logger, test_instant());

        let bytes_before = std::fs::read(storage.catalog.path()).unwrap();

        let err = service.borrow("0000000000000", "Alice").unwrap_err();
        assert!(err.is_not_found());

        let bytes_after = std::fs::read(storage.catalog.path()).unwrap();
        assert_eq!(bytes_before, bytes_after);
        assert_eq!(logger.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_borrow_already_borrowed() {
        let (_temp, storage, logger) = seeded_fixture();
        let service = service_at(&storage, &logger, test_instant());

        service.borrow(SEED_ISBN, "Alice").unwrap();
        let err = service.borrow(SEED_ISBN, "Bob").unwrap_err();
        assert!(matches!(err, LibrisError::AlreadyBorrowed { .. }));

        // Record not mutated by the failed attempt
        let book = storage.catalog.get(SEED_ISBN).unwrap().unwrap();
        assert_eq!(book.loan.unwrap().borrower, "Alice");
    }

    #[test]
    fn test_borrow_empty_name_rejected() {
        let (_temp, storage, logger) = seeded_fixture();
        let service = service_at(&storage, &logger, test_instant());

        let err = service.borrow(SEED_ISBN, "   ").unwrap_err();
        assert!(err.is_validation());

        let book = storage.catalog.get(SEED_ISBN).unwrap().unwrap();
        assert!(book.is_available());
    }

    #[test]
    fn test_immediate_return_has_no_fine_and_restores_record() {
        let (_temp, storage, logger) = seeded_fixture();
        let now = test_instant();

        let before = storage.catalog.get(SEED_ISBN).unwrap().unwrap();

        let service = service_at(&storage, &logger, now);
        service.borrow(SEED_ISBN, "Alice").unwrap();
        let receipt = service.return_book(SEED_ISBN).unwrap();

        assert!(receipt.fine.is_zero());
        assert_eq!(receipt.overdue_days, 0);
        assert_eq!(receipt.borrower, "Alice");

        let after = storage.catalog.get(SEED_ISBN).unwrap().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_return_three_days_overdue_fines_three_dollars() {
        let (_temp, storage, logger) = seeded_fixture();
        let borrowed_at = test_instant();

        service_at(&storage, &logger, borrowed_at)
            .borrow(SEED_ISBN, "Alice")
            .unwrap();

        // 10 days after a 7-day loan: 3 whole days overdue
        let returned_at = borrowed_at + Duration::days(10);
        let receipt = service_at(&storage, &logger, returned_at)
            .return_book(SEED_ISBN)
            .unwrap();

        assert_eq!(receipt.overdue_days, 3);
        assert_eq!(receipt.fine, Money::from_cents(300));

        let entries = logger.read_all().unwrap();
        assert!(entries[1].contains("Alice returned"));
        assert!(entries[1].contains("Fine: $3.00"));
    }

    #[test]
    fn test_return_exactly_on_due_date_has_no_fine() {
        let (_temp, storage, logger) = seeded_fixture();
        let borrowed_at = test_instant();

        service_at(&storage, &logger, borrowed_at)
            .borrow(SEED_ISBN, "Alice")
            .unwrap();

        let receipt = service_at(&storage, &logger, borrowed_at + Duration::days(7))
            .return_book(SEED_ISBN)
            .unwrap();

        assert!(receipt.fine.is_zero());
    }

    #[test]
    fn test_return_unknown_isbn() {
        let (_temp, storage, logger) = seeded_fixture();
        let service = service_at(&storage, &logger, test_instant());

        let err = service.return_book("0000000000000").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_return_available_book() {
        let (_temp, storage, logger) = seeded_fixture();
        let service = service_at(&storage, &logger, test_instant());

        let bytes_before = std::fs::read(storage.catalog.path()).unwrap();

        let err = service.return_book(SEED_ISBN).unwrap_err();
        assert!(matches!(err, LibrisError::NotBorrowed { .. }));

        let bytes_after = std::fs::read(storage.catalog.path()).unwrap();
        assert_eq!(bytes_before, bytes_after);
    }

    #[test]
    fn test_borrow_trims_borrower_name() {
        let (_temp, storage, logger) = seeded_fixture();
        let service = service_at(&storage, &logger, test_instant());

        let receipt = service.borrow(SEED_ISBN, "  Alice  ").unwrap();
        assert_eq!(receipt.book.loan.unwrap().borrower, "Alice");
    }
}
