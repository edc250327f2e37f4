use anyhow::Result;
use clap::{Parser, Subcommand};

use libris::audit::TransactionLogger;
use libris::cli::{handle_borrow, handle_list, handle_log, handle_return, handle_search};
use libris::config::{paths::LibrisPaths, settings::Settings};
use libris::storage::Storage;

#[derive(Parser)]
#[command(
    name = "libris",
    version,
    about = "Terminal-based library catalog manager",
    long_about = "Libris is a terminal-based library catalog manager. It tracks \
                  a catalog of books, lets you search it, and records borrow and \
                  return transactions with due dates and overdue fines."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all books in the catalog
    #[command(alias = "ls")]
    List,

    /// Search the catalog
    Search {
        /// Text to look for (case-insensitive substring)
        query: String,
        /// Field to search (title, author, genre)
        #[arg(short, long, default_value = "title")]
        field: String,
    },

    /// Borrow a book
    Borrow {
        /// ISBN of the book to borrow
        isbn: String,
        /// Name of the borrower
        borrower: String,
    },

    /// Return a borrowed book
    Return {
        /// ISBN of the book to return
        isbn: String,
    },

    /// Show recent transactions
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the catalog with the default book set
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LibrisPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage and the transaction log
    let logger = TransactionLogger::new(paths.transaction_log());
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::List) => {
            handle_list(&storage, &logger, &settings)?;
        }
        Some(Commands::Search { query, field }) => {
            handle_search(&storage, &logger, &settings, &query, &field)?;
        }
        Some(Commands::Borrow { isbn, borrower }) => {
            handle_borrow(&storage, &logger, &settings, &isbn, &borrower)?;
        }
        Some(Commands::Return { isbn }) => {
            handle_return(&storage, &logger, &settings, &isbn)?;
        }
        Some(Commands::Log { limit }) => {
            handle_log(&logger, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Libris at: {}", paths.data_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!(
                "The catalog holds {} book(s). Run 'libris list' to see them.",
                storage.catalog.count()?
            );
        }
        Some(Commands::Config) => {
            println!("Libris Configuration");
            println!("====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Catalog file:     {}", paths.catalog_file().display());
            println!("Transaction log:  {}", paths.transaction_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("Libris - Terminal-based library catalog manager");
            println!();
            println!("Run 'libris --help' for usage information.");
            println!("Run 'libris list' to see the catalog.");
        }
    }

    Ok(())
}
