//! Transaction logger for the append-only transaction log
//!
//! Each entry is written as a single timestamped line and flushed
//! immediately. Ordering in the file equals call order.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::error::{LibrisError, LibrisResult};

/// Handles writing transaction entries to the log file
///
/// The log is plain text: one line per transaction, prefixed with an
/// RFC 3339 timestamp, e.g.
///
/// ```text
/// 2025-03-01T12:00:00+00:00 - Alice borrowed 'The Discovery of India' (ISBN: 9780195623598). Due date: 2025-03-08
/// ```
pub struct TransactionLogger {
    /// Path to the transaction log file
    log_path: PathBuf,
}

impl TransactionLogger {
    /// Create a new TransactionLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one transaction line, stamped with the current time
    pub fn record(&self, message: &str) -> LibrisResult<()> {
        self.record_at(message, Utc::now())
    }

    /// Append one transaction line with an explicit timestamp
    ///
    /// Each write opens the file in append mode and flushes immediately to
    /// ensure durability.
    pub fn record_at(&self, message: &str, timestamp: DateTime<Utc>) -> LibrisResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| LibrisError::Io(format!("Failed to create log directory: {}", e)))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| LibrisError::Io(format!("Failed to open transaction log: {}", e)))?;

        writeln!(file, "{} - {}", timestamp.to_rfc3339(), message)
            .map_err(|e| LibrisError::Io(format!("Failed to write transaction entry: {}", e)))?;

        file.flush()
            .map_err(|e| LibrisError::Io(format!("Failed to flush transaction log: {}", e)))?;

        Ok(())
    }

    /// Read all transaction lines from the log file
    ///
    /// Returns lines in chronological order (oldest first).
    pub fn read_all(&self) -> LibrisResult<Vec<String>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| LibrisError::Io(format!("Failed to open transaction log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                LibrisError::Io(format!(
                    "Failed to read transaction log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            entries.push(line);
        }

        Ok(entries)
    }

    /// Read the most recent N entries from the log
    pub fn read_recent(&self, count: usize) -> LibrisResult<Vec<String>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Get the number of entries in the transaction log
    pub fn entry_count(&self) -> LibrisResult<usize> {
        Ok(self.read_all()?.len())
    }

    /// Check if the transaction log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the transaction log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
