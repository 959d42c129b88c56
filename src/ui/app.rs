use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::debug;

use crate::db::{
    book_exists, delete_book, fetch_book_by_key, fetch_books, insert_book, update_book, Store,
};
use crate::error::BookError;

use super::forms::{parse_id, BookField, BookForm};
use super::helpers::{render_status, surface_error, StatusKind};
use super::menu::{Command, MENU_LINES};

/// Every menu entry except "Quit" is served by a handler of this shape.
type Handler<R, W> = fn(&mut App<R, W>) -> Result<()>;

/// Application state for one interactive session: the open store plus the
/// streams the dialogue reads from and writes to.
pub struct App<R, W> {
    store: Store,
    input: R,
    output: W,
    styled: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(store: Store, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            styled: false,
        }
    }

    /// Toggle coloured status lines.
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Give the store back once the session is over so it can be closed.
    pub fn into_store(self) -> Store {
        self.store
    }

    /// Show the menu, read one choice and act on it. Returns `true` once the
    /// operator quits or input runs out.
    pub fn step(&mut self) -> Result<bool> {
        writeln!(self.output).context("failed to write menu")?;
        for line in MENU_LINES {
            writeln!(self.output, "{line}").context("failed to write menu")?;
        }

        let Some(choice) = self.prompt("Enter your choice: ")? else {
            self.say("Goodbye!")?;
            return Ok(true);
        };

        let Some(command) = Command::parse(&choice) else {
            self.warn("Invalid choice")?;
            return Ok(false);
        };

        match handler_for::<R, W>(command) {
            Some(handler) => {
                self.dispatch(command, handler)?;
                Ok(false)
            }
            None => {
                self.say("Goodbye!")?;
                Ok(true)
            }
        }
    }

    /// Run `handler` for `command`. Operator mistakes are printed and
    /// swallowed; anything else is a storage or I/O failure and propagates.
    fn dispatch(&mut self, command: Command, handler: Handler<R, W>) -> Result<()> {
        match handler(self) {
            Ok(()) => Ok(()),
            Err(err) if err.downcast_ref::<BookError>().is_some() => {
                debug!("event=input_rejected module=ui command={command:?} reason={err}");
                let message = surface_error(&err);
                self.warn(&message)
            }
            Err(err) => Err(err),
        }
    }

    /// Collect all four answers before validating any of them, so the
    /// dialogue always has the same shape. The existence check runs before
    /// the insert so a duplicate id is reported without touching the row
    /// already stored under it.
    fn enter_book(&mut self) -> Result<()> {
        let form = BookForm {
            id: self.answer("Enter the book ID: ")?,
            title: self.answer("Enter the book title: ")?,
            author: self.answer("Enter the book author: ")?,
            qty: self.answer("Enter the quantity: ")?,
        };
        let book = form.parse_inputs()?;

        if book_exists(self.store.conn(), book.id)? {
            return Err(BookError::AlreadyExists(book.id).into());
        }

        self.store.write(|tx| insert_book(tx, &book))?;
        self.say("Book added successfully!")
    }

    /// Ask for the id and the field first, then only for the value of the
    /// chosen field. A bad id or choice ends the dialogue before the value
    /// prompt. A missing id is reported by `update_book` after the statement
    /// changes zero rows, so nothing is committed.
    fn update_book(&mut self) -> Result<()> {
        let raw_id = self.answer("Enter the book ID: ")?;
        writeln!(self.output, "What do you want to update?")
            .context("failed to write prompt")?;
        for line in BookField::MENU {
            writeln!(self.output, "{line}").context("failed to write prompt")?;
        }
        let raw_choice = self.answer("Enter your choice: ")?;

        let id = parse_id(&raw_id)?;
        let field = BookField::parse(&raw_choice)?;
        let raw_value = self.answer(field.prompt())?;
        let update = field.parse_value(&raw_value)?;

        self.store.write(|tx| update_book(tx, id, &update))?;
        self.say("Book updated successfully!")
    }

    /// Delete uses its own wording for a malformed id. The existence check
    /// comes first so an unknown id never opens a write.
    fn delete_book(&mut self) -> Result<()> {
        let raw_id = self.answer("Enter the book ID: ")?;
        let id = parse_id(&raw_id).map_err(|_| BookError::IdNotANumber)?;

        if !book_exists(self.store.conn(), id)? {
            return Err(BookError::NotFound(id).into());
        }

        self.store.write(|tx| delete_book(tx, id))?;
        self.say("Book deleted successfully!")
    }

    /// Search is the one lookup that skips id validation: the trimmed text
    /// goes straight to SQLite, which converts numeric text such as `3001.0`
    /// before comparing it with the integer key. Anything else matches
    /// nothing and reads as "not found".
    fn search_book(&mut self) -> Result<()> {
        let raw_id = self.answer("Enter the book ID: ")?;

        match fetch_book_by_key(self.store.conn(), raw_id.trim())? {
            Some(book) => {
                writeln!(self.output).context("failed to write book")?;
                writeln!(self.output, "{book}").context("failed to write book")
            }
            None => self.warn("Book not found."),
        }
    }

    /// List every row in storage order, or a single notice for an empty table.
    fn display_books(&mut self) -> Result<()> {
        let books = fetch_books(self.store.conn())?;
        if books.is_empty() {
            return self.say("No books found.");
        }
        for book in books {
            writeln!(self.output, "{book}").context("failed to write book")?;
        }
        Ok(())
    }

    /// Print `label` and read one line. `None` means the input is exhausted.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// garbled line simply fails whatever validation the answer goes through.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("failed to read input")?;
        if read == 0 {
            // Keep the transcript tidy when input ends without a newline.
            writeln!(self.output).context("failed to write prompt")?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like `prompt`, but exhausted input reads as an empty answer.
    fn answer(&mut self, label: &str) -> Result<String> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        self.status(text, StatusKind::Info)
    }

    fn warn(&mut self, text: &str) -> Result<()> {
        self.status(text, StatusKind::Error)
    }

    fn status(&mut self, text: &str, kind: StatusKind) -> Result<()> {
        let line = render_status(text, kind, self.styled);
        writeln!(self.output, "{line}").context("failed to write status")
    }
}

/// Handler for `command`, or `None` for "Quit", which ends the session.
fn handler_for<R: BufRead, W: Write>(command: Command) -> Option<Handler<R, W>> {
    let handler: Handler<R, W> = match command {
        Command::EnterBook => App::enter_book,
        Command::UpdateBook => App::update_book,
        Command::DeleteBook => App::delete_book,
        Command::SearchBook => App::search_book,
        Command::DisplayBooks => App::display_books,
        Command::Quit => return None,
    };
    Some(handler)
}
