//! Core data models for Libris
//!
//! This module contains the data structures that represent the catalog
//! domain: books, active loans, search fields, and fine amounts.

pub mod book;
pub mod money;

pub use book::{Book, Loan, SearchField, BORROW_PERIOD_DAYS};
pub use money::{Money, FINE_PER_DAY};
