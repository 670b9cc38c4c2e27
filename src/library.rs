use crate::command::Command;
use anyhow::Result;
use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;
use thiserror::Error;

/// A book on the shelf. Equality is structural: removal matches the
/// first entry with the same title and author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.title, self.author)
    }
}

/// Factory Method indirection over [`Book::new`]. No caching and no
/// identity management; every call yields a fresh value.
#[derive(Default)]
pub struct BookFactory;

impl BookFactory {
    pub fn create_book(&self, title: impl Into<String>, author: impl Into<String>) -> Book {
        Book::new(title, author)
    }
}

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("book not found: {0}")]
    BookNotFound(Book),
}

/// Ordered shelf of books. Insertion appends; removal deletes the first
/// structural match. Duplicates are allowed and never deduplicated.
#[derive(Default)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Remove the first book equal to `book`.
    ///
    /// Removing a book that is not on the shelf is treated as a
    /// programming error and reported as [`LibraryError::BookNotFound`];
    /// callers that want a no-op must check membership themselves.
    pub fn remove_book(&mut self, book: &Book) -> Result<(), LibraryError> {
        match self.books.iter().position(|b| b == book) {
            Some(idx) => {
                self.books.remove(idx);
                Ok(())
            }
            None => Err(LibraryError::BookNotFound(book.clone())),
        }
    }

    /// Restartable enumeration of the shelf in insertion order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Write one line per book in insertion order, or a distinct line
    /// when the shelf is empty.
    pub fn show_books(&self, out: &mut dyn Write) -> Result<()> {
        if self.books.is_empty() {
            writeln!(out, "There are no books in the library.")?;
        } else {
            for book in &self.books {
                writeln!(out, "{book}")?;
            }
        }
        Ok(())
    }
}

/// Single injected logging capability, invoked synchronously right after
/// the mutation it describes. One logger, no subscriber list.
pub trait Logger {
    fn notify(&mut self, message: &str) -> Result<()>;
}

/// Any writable stream can serve as the logger.
impl<W: Write> Logger for W {
    fn notify(&mut self, message: &str) -> Result<()> {
        writeln!(self, "Log: {message}")?;
        Ok(())
    }
}

/// Keeper of the log. The librarian does not touch the shelf itself; it
/// only narrates what the reader has already done.
pub struct Librarian {
    logger: Box<dyn Logger>,
}

impl Librarian {
    pub fn new(logger: Box<dyn Logger>) -> Self {
        Self { logger }
    }

    pub fn book_added(&mut self, book: &Book) -> Result<()> {
        self.logger.notify(&format!("Added book: {book}"))
    }

    pub fn book_removed(&mut self, book: &Book) -> Result<()> {
        self.logger.notify(&format!("Removed book: {book}"))
    }
}

/// Puts a book on a shared shelf.
pub struct AddBookCommand {
    library: Rc<RefCell<Library>>,
    book: Book,
}

impl AddBookCommand {
    pub fn new(library: Rc<RefCell<Library>>, book: Book) -> Self {
        Self { library, book }
    }
}

impl Command for AddBookCommand {
    fn execute(&self, _out: &mut dyn Write) -> Result<()> {
        self.library.borrow_mut().add_book(self.book.clone());
        Ok(())
    }
}

/// Takes a book off a shared shelf. Fails if the book is absent, per the
/// [`Library::remove_book`] policy.
pub struct RemoveBookCommand {
    library: Rc<RefCell<Library>>,
    book: Book,
}

impl RemoveBookCommand {
    pub fn new(library: Rc<RefCell<Library>>, book: Book) -> Self {
        Self { library, book }
    }
}

impl Command for RemoveBookCommand {
    fn execute(&self, _out: &mut dyn Write) -> Result<()> {
        self.library.borrow_mut().remove_book(&self.book)?;
        Ok(())
    }
}

/// Invoker for the library demo. Each request builds the matching
/// command, executes it against the shelf, then tells the librarian
/// separately — command execution never triggers the log on its own,
/// and both notifications fire per request.
pub struct Reader {
    library: Rc<RefCell<Library>>,
    librarian: Librarian,
}

impl Reader {
    pub fn new(library: Rc<RefCell<Library>>, librarian: Librarian) -> Self {
        Self { library, librarian }
    }

    pub fn request_add_book(&mut self, book: Book, out: &mut dyn Write) -> Result<()> {
        let command = AddBookCommand::new(Rc::clone(&self.library), book.clone());
        command.execute(out)?;
        self.librarian.book_added(&book)
    }

    pub fn request_remove_book(&mut self, book: Book, out: &mut dyn Write) -> Result<()> {
        let command = RemoveBookCommand::new(Rc::clone(&self.library), book.clone());
        command.execute(out)?;
        self.librarian.book_removed(&book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemWriter;

    fn shelf(books: &[(&str, &str)]) -> Library {
        let factory = BookFactory;
        let mut library = Library::new();
        for (title, author) in books {
            library.add_book(factory.create_book(*title, *author));
        }
        library
    }

    #[test]
    fn test_show_books_lists_in_insertion_order() {
        let library = shelf(&[("1984", "George Orwell"), ("1963", "The Amazing Spider-Man")]);

        let mut out: Vec<u8> = Vec::new();
        library.show_books(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\"1984\" - George Orwell\n\"1963\" - The Amazing Spider-Man\n"
        );
    }

    #[test]
    fn test_show_books_reports_empty_shelf_distinctly() {
        let library = Library::new();
        let mut out: Vec<u8> = Vec::new();
        library.show_books(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "There are no books in the library.\n"
        );
    }

    #[test]
    fn test_remove_keeps_relative_order_of_the_rest() {
        let mut library = shelf(&[("a", "A"), ("b", "B"), ("c", "C")]);

        library.remove_book(&Book::new("b", "B")).unwrap();

        let titles: Vec<&str> = library.books().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_missing_book_is_an_error() {
        let mut library = shelf(&[("a", "A")]);

        let err = library.remove_book(&Book::new("b", "B")).unwrap_err();

        assert!(matches!(err, LibraryError::BookNotFound(_)));
        // The shelf is untouched.
        assert_eq!(library.books().count(), 1);
    }

    #[test]
    fn test_remove_deletes_only_the_first_duplicate() {
        let mut library = shelf(&[("a", "A"), ("a", "A")]);

        library.remove_book(&Book::new("a", "A")).unwrap();

        assert_eq!(library.books().count(), 1);
    }

    #[test]
    fn test_reader_mutates_shelf_and_notifies_librarian() {
        let library = Rc::new(RefCell::new(Library::new()));
        let (log, log_handle) = MemWriter::with_handle();
        let librarian = Librarian::new(Box::new(log));
        let mut reader = Reader::new(Rc::clone(&library), librarian);

        let mut out: Vec<u8> = Vec::new();
        let book = Book::new("1984", "George Orwell");
        reader.request_add_book(book.clone(), &mut out).unwrap();

        assert_eq!(library.borrow().books().count(), 1);
        assert_eq!(
            String::from_utf8(log_handle.borrow().clone()).unwrap(),
            "Log: Added book: \"1984\" - George Orwell\n"
        );

        reader.request_remove_book(book, &mut out).unwrap();

        assert_eq!(library.borrow().books().count(), 0);
        assert_eq!(
            String::from_utf8(log_handle.borrow().clone()).unwrap(),
            "Log: Added book: \"1984\" - George Orwell\n\
             Log: Removed book: \"1984\" - George Orwell\n"
        );
    }

    #[test]
    fn test_end_to_end_add_remove_scenario() {
        let factory = BookFactory;
        let library = Rc::new(RefCell::new(Library::new()));
        let librarian = Librarian::new(Box::new(MemWriter::new()));
        let mut reader = Reader::new(Rc::clone(&library), librarian);
        let mut out: Vec<u8> = Vec::new();

        let orwell = factory.create_book("1984", "George Orwell");
        let spiderman = factory.create_book("1963", "The Amazing Spider-Man");

        reader.request_add_book(orwell.clone(), &mut out).unwrap();
        reader.request_add_book(spiderman.clone(), &mut out).unwrap();

        let listed: Vec<Book> = library.borrow().books().cloned().collect();
        assert_eq!(listed, vec![orwell.clone(), spiderman.clone()]);

        reader.request_remove_book(orwell, &mut out).unwrap();
        let tolstoy = factory.create_book("1869", "War and Peace");
        reader.request_add_book(tolstoy.clone(), &mut out).unwrap();

        let listed: Vec<Book> = library.borrow().books().cloned().collect();
        assert_eq!(listed, vec![spiderman, tolstoy]);
    }
}
