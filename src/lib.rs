//! Libris - Terminal-based library catalog manager
//!
//! This library provides the core functionality for the Libris catalog
//! manager: a single-user tool that tracks a set of book records, supports
//! listing and searching them, and records borrow/return transactions with
//! due-date and overdue-fine computation.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (books, loans, fines)
//! - `storage`: JSON file storage layer with atomic writes
//! - `audit`: Append-only transaction log
//! - `services`: Business logic layer (the borrow/return lifecycle)
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use libris::config::{paths::LibrisPaths, settings::Settings};
//!
//! let paths = LibrisPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::LibrisError;
