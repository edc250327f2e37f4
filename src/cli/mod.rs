//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod catalog;

pub use catalog::{
    handle_borrow, handle_list, handle_log, handle_return, handle_search,
};
