/// Lines printed above the choice prompt on every iteration.
pub(crate) const MENU_LINES: [&str; 7] = [
    "Welcome to the ebookstore database! What would you like to do?",
    "1. Enter a new book",
    "2. Update an existing book",
    "3. Delete a book",
    "4. Search for a book",
    "5. Display all books",
    "6. Quit",
];

/// The six entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    EnterBook,
    UpdateBook,
    DeleteBook,
    SearchBook,
    DisplayBooks,
    Quit,
}

impl Command {
    /// Map a menu token to its command. Anything but "1" through "6" is
    /// rejected.
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Command::EnterBook),
            "2" => Some(Command::UpdateBook),
            "3" => Some(Command::DeleteBook),
            "4" => Some(Command::SearchBook),
            "5" => Some(Command::DisplayBooks),
            "6" => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_tokens() {
        assert_eq!(Command::parse("1"), Some(Command::EnterBook));
        assert_eq!(Command::parse(" 6\n"), Some(Command::Quit));
        assert_eq!(Command::parse("7"), None);
        assert_eq!(Command::parse("quit"), None);
        assert_eq!(Command::parse(""), None);
    }
}
