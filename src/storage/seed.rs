//! Default seed data
//!
//! The fixed starter catalog installed on first run when no prior catalog
//! file exists. All seed books start on the shelf.

use crate::models::Book;

/// The default catalog installed when the store is empty at first run
pub fn default_books() -> Vec<Book> {
    vec![
        Book::new(
            "9788129135513",
            "The 3 Mistakes of My Life",
            "Chetan Bhagat",
            Some("Novel".to_string()),
        ),
        Book::new(
            "9781788441025",
            "Think and Grow Rich",
            "Napoleon Hill",
            Some("Self-help book".to_string()),
        ),
        Book::new(
            "9780195623598",
            "The Discovery of India",
            "Jawaharlal Nehru",
            Some("History & The Past".to_string()),
        ),
        Book::new(
            "9789492510532",
            "Kings of the Chessboard",
            "Paul van der Sterren",
            Some("Biography".to_string()),
        ),
        Book::new(
            "9788129115300",
            "2 States: The Story of My Marriage",
            "Chetan Bhagat",
            Some("Romance novel".to_string()),
        ),
    ]
}
