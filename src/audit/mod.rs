//! Transaction logging for Libris
//!
//! Records every borrow and return as one human-readable line in an
//! append-only log file. Log writes are best-effort from the caller's point
//! of view: a failed append never aborts the business operation.

pub mod logger;

pub use logger::TransactionLogger;
