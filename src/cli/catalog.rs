//! Catalog CLI commands
//!
//! Implements the list, search, borrow, return, and log commands. The shell
//! validates the search field here, before the service is called, so the
//! core only ever sees known fields.

use crate::audit::TransactionLogger;
use crate::config::Settings;
use crate::display::{
    format_book_list, format_borrow_receipt, format_return_receipt,
};
use crate::error::{LibrisError, LibrisResult};
use crate::models::SearchField;
use crate::services::CatalogService;
use crate::storage::Storage;

/// List the whole catalog
pub fn handle_list(
    storage: &Storage,
    logger: &TransactionLogger,
    settings: &Settings,
) -> LibrisResult<()> {
    let service = CatalogService::new(storage, logger);
    let books = service.list()?;
    print!("{}", format_book_list(&books, settings));
    Ok(())
}

/// Search the catalog on one field
pub fn handle_search(
    storage: &Storage,
    logger: &TransactionLogger,
    settings: &Settings,
    query: &str,
    field: &str,
) -> LibrisResult<()> {
    let field = SearchField::parse(field).ok_or_else(|| {
        LibrisError::Validation(format!(
            "Invalid search field: '{}'. Valid fields: title, author, genre",
            field
        ))
    })?;

    let service = CatalogService::new(storage, logger);
    let results = service.search(query, field)?;

    if results.is_empty() {
        println!("No books found matching your query.");
    } else {
        print!("{}", format_book_list(&results, settings));
    }

    Ok(())
}

/// Borrow a book by ISBN
pub fn handle_borrow(
    storage: &Storage,
    logger: &TransactionLogger,
    settings: &Settings,
    isbn: &str,
    borrower: &str,
) -> LibrisResult<()> {
    let service = CatalogService::new(storage, logger);
    let receipt = service.borrow(isbn, borrower)?;
    print!("{}", format_borrow_receipt(&receipt, settings));
    Ok(())
}

/// Return a book by ISBN
pub fn handle_return(
    storage: &Storage,
    logger: &TransactionLogger,
    settings: &Settings,
    isbn: &str,
) -> LibrisResult<()> {
    let service = CatalogService::new(storage, logger);
    let receipt = service.return_book(isbn)?;
    print!("{}", format_return_receipt(&receipt, settings));
    Ok(())
}

/// Show recent transaction log entries
pub fn handle_log(logger: &TransactionLogger, limit: usize) -> LibrisResult<()> {
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No transactions recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry);
    }

    Ok(())
}
