//! Service layer for Libris
//!
//! The service layer provides business logic on top of the storage layer:
//! the borrow/return lifecycle, fine computation, and catalog queries.

pub mod catalog;
pub mod clock;

pub use catalog::{BorrowReceipt, CatalogService, ReturnReceipt};
pub use clock::{Clock, FixedClock, SystemClock};
