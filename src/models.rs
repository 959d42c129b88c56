//! Domain types that mirror the `books` table. They stay plain data holders so
//! the persistence layer and the menu front end can share them freely.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One inventory record. The `id` is chosen by the operator rather than
/// generated by SQLite, so it doubles as the lookup key in every operation.
pub struct Book {
    /// Positive, operator-assigned primary key.
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Copies on hand. Always positive once stored.
    pub qty: i64,
}

impl Book {
    pub fn new(id: i64, title: &str, author: &str, qty: i64) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            qty,
        }
    }
}

impl fmt::Display for Book {
    /// Single-line rendering shared by the search and listing screens.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Quantity: {}",
            self.id, self.title, self.author, self.qty
        )
    }
}

/// A change to exactly one column of an existing book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookUpdate {
    Title(String),
    Author(String),
    Quantity(i64),
}

impl BookUpdate {
    /// Column touched by the update, used in log events.
    pub fn column(&self) -> &'static str {
        match self {
            BookUpdate::Title(_) => "title",
            BookUpdate::Author(_) => "author",
            BookUpdate::Quantity(_) => "qty",
        }
    }
}

/// Sample inventory inserted on startup when missing: (id, title, author, qty).
pub const SEED_BOOKS: [(i64, &str, &str, i64); 5] = [
    (3001, "A Tale of Two Cities", "Charles Dickens", 30),
    (
        3002,
        "Harry Potter and the Philosophers Stone",
        "J.K. Rowling",
        40,
    ),
    (3003, "The Lion, the Witch and the Wardrobe", "C. S. Lewis", 25),
    (3004, "The Lord of the Rings", "J.R.R Tolkien", 37),
    (3005, "Alice in Wonderland", "Lewis Carroll", 12),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_listing_format() {
        let book = Book::new(9001, "X", "Y", 1);
        assert_eq!(book.to_string(), "ID: 9001, Title: X, Author: Y, Quantity: 1");
    }

    #[test]
    fn seed_ids_are_unique_and_positive() {
        let mut ids: Vec<i64> = SEED_BOOKS.iter().map(|(id, ..)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SEED_BOOKS.len());
        assert!(SEED_BOOKS.iter().all(|(id, _, _, qty)| *id > 0 && *qty > 0));
    }
}
