//! Display formatting for terminal output
//!
//! Provides utilities for formatting catalog records and receipts for
//! terminal display, including tables and status indicators.

pub mod book;

pub use book::{
    format_book_details, format_book_list, format_borrow_receipt, format_return_receipt,
};
