use crate::error::BookError;
use crate::models::{Book, BookUpdate};

/// Parse an operator-supplied id. Only positive integers are accepted.
pub(crate) fn parse_id(raw: &str) -> Result<i64, BookError> {
    parse_positive(raw).ok_or(BookError::InvalidId)
}

/// Parse an on-hand quantity. Only positive integers are accepted.
pub(crate) fn parse_quantity(raw: &str) -> Result<i64, BookError> {
    parse_positive(raw).ok_or(BookError::InvalidQuantity)
}

fn parse_positive(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|value| *value > 0)
}

fn parse_text(raw: &str, err: BookError) -> Result<String, BookError> {
    let value = raw.trim();
    if value.is_empty() {
        Err(err)
    } else {
        Ok(value.to_string())
    }
}

/// Raw answers collected by the "enter a new book" dialogue.
#[derive(Debug, Clone)]
pub(crate) struct BookForm {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) qty: String,
}

impl BookForm {
    /// Validate the inputs in prompt order, stopping at the first bad field.
    pub(crate) fn parse_inputs(&self) -> Result<Book, BookError> {
        let id = parse_id(&self.id)?;
        let title = parse_text(&self.title, BookError::InvalidTitle)?;
        let author = parse_text(&self.author, BookError::InvalidAuthor)?;
        let qty = parse_quantity(&self.qty)?;
        Ok(Book {
            id,
            title,
            author,
            qty,
        })
    }
}

/// Which column the update dialogue is about to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BookField {
    Title,
    Author,
    Quantity,
}

impl BookField {
    pub(crate) const MENU: [&'static str; 3] = ["1. Title", "2. Author", "3. Quantity"];

    pub(crate) fn parse(choice: &str) -> Result<Self, BookError> {
        match choice.trim() {
            "1" => Ok(BookField::Title),
            "2" => Ok(BookField::Author),
            "3" => Ok(BookField::Quantity),
            _ => Err(BookError::InvalidChoice),
        }
    }

    pub(crate) fn prompt(self) -> &'static str {
        match self {
            BookField::Title => "Enter the new book title: ",
            BookField::Author => "Enter the new book author: ",
            BookField::Quantity => "Enter the new quantity: ",
        }
    }

    /// Validate the new value with the same rule the field has on creation.
    /// A bad quantity gets the update dialogue's own wording.
    pub(crate) fn parse_value(self, raw: &str) -> Result<BookUpdate, BookError> {
        match self {
            BookField::Title => parse_text(raw, BookError::InvalidTitle).map(BookUpdate::Title),
            BookField::Author => parse_text(raw, BookError::InvalidAuthor).map(BookUpdate::Author),
            BookField::Quantity => parse_quantity(raw)
                .map(BookUpdate::Quantity)
                .map_err(|_| BookError::QuantityNotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: &str, title: &str, author: &str, qty: &str) -> BookForm {
        BookForm {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            qty: qty.into(),
        }
    }

    #[test]
    fn ids_must_be_positive_integers() {
        assert_eq!(parse_id(" 42 "), Ok(42));
        assert_eq!(parse_id("0"), Err(BookError::InvalidId));
        assert_eq!(parse_id("-3"), Err(BookError::InvalidId));
        assert_eq!(parse_id("abc"), Err(BookError::InvalidId));
        assert_eq!(parse_id(""), Err(BookError::InvalidId));
    }

    #[test]
    fn validation_stops_at_first_bad_field() {
        assert_eq!(
            form("x", "", "", "0").parse_inputs(),
            Err(BookError::InvalidId)
        );
        assert_eq!(
            form("1", "  ", "", "0").parse_inputs(),
            Err(BookError::InvalidTitle)
        );
        assert_eq!(
            form("1", "T", "", "0").parse_inputs(),
            Err(BookError::InvalidAuthor)
        );
        assert_eq!(
            form("1", "T", "A", "many").parse_inputs(),
            Err(BookError::InvalidQuantity)
        );
        assert_eq!(
            form("1", "T", "A", "2").parse_inputs(),
            Ok(Book::new(1, "T", "A", 2))
        );
    }

    #[test]
    fn field_choice_accepts_only_menu_tokens() {
        assert_eq!(BookField::parse("2"), Ok(BookField::Author));
        assert_eq!(BookField::parse("4"), Err(BookError::InvalidChoice));
        assert_eq!(BookField::parse("title"), Err(BookError::InvalidChoice));
    }

    #[test]
    fn field_values_use_creation_rules() {
        assert_eq!(
            BookField::Quantity.parse_value("5"),
            Ok(BookUpdate::Quantity(5))
        );
        assert_eq!(
            BookField::Quantity.parse_value("-5"),
            Err(BookError::QuantityNotANumber)
        );
        assert_eq!(
            BookField::Title.parse_value(""),
            Err(BookError::InvalidTitle)
        );
    }
}
