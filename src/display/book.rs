//! Book display formatting
//!
//! Formats catalog records for terminal output in table and detail views.

use crate::config::Settings;
use crate::models::Book;
use crate::services::{BorrowReceipt, ReturnReceipt};

/// Status text for a record: on the shelf, or who has it and when it's due
fn status_text(book: &Book, settings: &Settings) -> String {
    match &book.loan {
        None => "Available".to_string(),
        Some(loan) => format!(
            "Borrowed by {} (due {})",
            loan.borrower,
            loan.due_date.format(&settings.date_format)
        ),
    }
}

/// Format a list of books as a table
pub fn format_book_list(books: &[Book], settings: &Settings) -> String {
    if books.is_empty() {
        return "No books found.\n".to_string();
    }

    // Calculate column widths
    let title_width = books
        .iter()
        .map(|b| b.title.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let author_width = books
        .iter()
        .map(|b| b.author.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let genre_width = books
        .iter()
        .map(|b| b.genre_display().len())
        .max()
        .unwrap_or(5)
        .max(5);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:<title_width$}  {:<author_width$}  {:<13}  {:<genre_width$}  {}\n",
        "Title",
        "Author",
        "ISBN",
        "Genre",
        "Status",
        title_width = title_width,
        author_width = author_width,
        genre_width = genre_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<title_width$}  {:-<author_width$}  {:-<13}  {:-<genre_width$}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width,
        author_width = author_width,
        genre_width = genre_width,
    ));

    // Book rows
    for book in books {
        output.push_str(&format!(
            "{:<title_width$}  {:<author_width$}  {:<13}  {:<genre_width$}  {}\n",
            book.title,
            book.author,
            book.isbn,
            book.genre_display(),
            status_text(book, settings),
            title_width = title_width,
            author_width = author_width,
            genre_width = genre_width,
        ));
    }

    output
}

/// Format a single book's details
pub fn format_book_details(book: &Book, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Book: {}\n", book.title));
    output.push_str(&format!("  Author:  {}\n", book.author));
    output.push_str(&format!("  ISBN:    {}\n", book.isbn));
    output.push_str(&format!("  Genre:   {}\n", book.genre_display()));
    output.push_str(&format!("  Status:  {}\n", status_text(book, settings)));

    if let Some(loan) = &book.loan {
        output.push_str(&format!(
            "  Borrowed: {}\n",
            loan.borrow_date.format(&settings.date_format)
        ));
        output.push_str(&format!(
            "  Due:      {}\n",
            loan.due_date.format(&settings.date_format)
        ));
    }

    output
}

/// Format a borrow confirmation for the user
pub fn format_borrow_receipt(receipt: &BorrowReceipt, settings: &Settings) -> String {
    format!(
        "You have successfully borrowed '{}'. It is due on {}.\n",
        receipt.book.title,
        receipt.due_date.format(&settings.date_format)
    )
}

/// Format a return confirmation, including the fine when one is owed
pub fn format_return_receipt(receipt: &ReturnReceipt, settings: &Settings) -> String {
    let mut output = format!("Book '{}' returned successfully.\n", receipt.book.title);

    if receipt.fine.is_positive() {
        output.push_str(&format!(
            "You have a fine of {} for overdue return ({} day(s) late).\n",
            receipt.fine.format_with_symbol(&settings.currency_symbol),
            receipt.overdue_days
        ));
    }

    output
}
