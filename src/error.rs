//! Operator-facing failures. Each variant's message is printed verbatim by the
//! menu loop, which then returns to the menu instead of aborting.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookError {
    #[error("Invalid book ID - please enter the correct number.")]
    InvalidId,
    /// Wording used by the delete dialogue for a malformed id.
    #[error("Invalid book ID. ID must be a number.")]
    IdNotANumber,
    #[error("Invalid title, please try again.")]
    InvalidTitle,
    #[error("Invalid author, please try again.")]
    InvalidAuthor,
    #[error("Invalid quantity, please try again.")]
    InvalidQuantity,
    /// Wording used by the update dialogue for a malformed quantity.
    #[error("Invalid quantity. Quantity must be a number.")]
    QuantityNotANumber,
    #[error("Invalid choice")]
    InvalidChoice,
    #[error("Book with same ID already exists, please try again")]
    AlreadyExists(i64),
    #[error("That book ID does not exist. Please try again.")]
    NotFound(i64),
}
