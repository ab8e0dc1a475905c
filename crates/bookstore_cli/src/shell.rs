//! Interactive menu shell.
//!
//! # Responsibility
//! - Drive the main menu and the enter/update/delete/search workflows.
//! - Gate every workflow except enter behind the existence guard.
//!
//! # Invariants
//! - Each workflow returns to its own sub-menu after finishing an action and
//!   to the main menu only on `e`.
//! - A delete never asks for confirmation when the id does not exist.

use crate::display;
use crate::prompt::Prompter;
use bookstore_core::{
    parse_book_id, parse_quantity, Book, BookDraft, BookId, BookRepository, BookService,
    DeleteOutcome, RepoError,
};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub enum CliError {
    Io(io::Error),
    Repo(RepoError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal i/o failed: {err}"),
            Self::Repo(err) => write!(f, "catalog store failed: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Which screen the edit loop is reviewing.
enum ReviewTarget {
    New,
    Existing(BookId),
}

enum Review {
    Save(BookDraft),
    Cancel,
}

pub struct Shell<Repo: BookRepository, R, W> {
    service: BookService<Repo>,
    prompter: Prompter<R, W>,
}

impl<Repo: BookRepository, R: BufRead, W: Write> Shell<Repo, R, W> {
    pub fn new(service: BookService<Repo>, prompter: Prompter<R, W>) -> Self {
        Self { service, prompter }
    }

    /// Runs the main menu until the user exits.
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            match self.prompter.choose(&display::main_menu())?.as_str() {
                "1" => self.enter_workflow()?,
                "2" => self.guarded("update", Self::update_workflow)?,
                "3" => self.guarded("delete", Self::delete_workflow)?,
                "4" => self.guarded("search", Self::search_workflow)?,
                "e" => {
                    self.prompter.say(&format!("{}\n", display::banner(display::LOGGED_OUT)))?;
                    info!("event=shell_exit module=cli status=ok");
                    return Ok(());
                }
                _ => self.prompter.say(display::INVALID_MENU_OPTION)?,
            }
        }
    }

    fn guarded(&mut self, workflow: &str, body: fn(&mut Self) -> CliResult<()>) -> CliResult<()> {
        if !self.service.has_data()? {
            info!("event=workflow_gate module=cli status=blocked workflow={workflow}");
            return self.prompter.say(&display::banner(display::NO_DATA)).map_err(Into::into);
        }
        body(self)
    }

    fn enter_workflow(&mut self) -> CliResult<()> {
        let menu = display::sub_menu(
            "NEW BOOK ENTRY",
            &[
                ("f", "proceed to book entry"),
                ("e", "go back to the Main Menu"),
            ],
        );
        loop {
            match self.prompter.choose(&menu)?.as_str() {
                "e" => return Ok(()),
                "f" => {
                    let draft = BookDraft {
                        title: self
                            .prompter
                            .ask("\nPlease enter the title of the book to be added:")?,
                        author: self
                            .prompter
                            .ask("\nPlease enter the author of the book to be added:")?,
                        qty: self.ask_quantity("\nPlease enter quantity of books to be added:")?,
                    };
                    if let Review::Save(draft) = self.review(ReviewTarget::New, draft)? {
                        let id = self.service.create_book(&draft)?;
                        self.prompter.say(&display::book_added(id))?;
                    }
                }
                _ => self.prompter.say(display::INVALID_MENU_OPTION)?,
            }
        }
    }

    fn update_workflow(&mut self) -> CliResult<()> {
        let menu = display::sub_menu(
            "BOOK UPDATE",
            &[
                ("f", "proceed to book update"),
                ("e", "go back to the Main Menu"),
            ],
        );
        loop {
            match self.prompter.choose(&menu)?.as_str() {
                "e" => return Ok(()),
                "f" => {
                    let id =
                        self.ask_book_id("\nPlease enter the ID of the book you'd like to update")?;
                    let Some(book) = self.find_or_report(id)? else {
                        continue;
                    };
                    if let Review::Save(draft) =
                        self.review(ReviewTarget::Existing(book.id), book.to_draft())?
                    {
                        self.service.update_book(book.id, &draft)?;
                        self.prompter.say(&display::banner(display::BOOK_UPDATED))?;
                    }
                }
                _ => self.prompter.say(display::INVALID_MENU_OPTION)?,
            }
        }
    }

    fn delete_workflow(&mut self) -> CliResult<()> {
        let menu = display::sub_menu(
            "BOOK DELETION",
            &[
                ("f", "proceed to book deletion"),
                ("e", "go back to the Main Menu"),
            ],
        );
        loop {
            match self.prompter.choose(&menu)?.as_str() {
                "e" => return Ok(()),
                "f" => {
                    let id = self.ask_book_id("\nPlease enter the ID of the book to be deleted:")?;
                    let Self { service, prompter } = &mut *self;
                    let outcome = service.delete_book(id, |book: &Book| -> CliResult<bool> {
                        let answer = prompter.choose_from(
                            &display::delete_confirmation(book),
                            display::YES_NO_RETRY,
                            &["y", "n"],
                        )?;
                        Ok(answer == "y")
                    })?;
                    let message = match outcome {
                        DeleteOutcome::NotFound(_) => display::banner(display::NOT_FOUND),
                        DeleteOutcome::Deleted(book) => display::book_deleted(book.id),
                        DeleteOutcome::Cancelled(_) => display::banner(display::OPERATION_CANCELLED),
                    };
                    self.prompter.say(&message)?;
                }
                _ => self.prompter.say(display::INVALID_MENU_OPTION)?,
            }
        }
    }

    fn search_workflow(&mut self) -> CliResult<()> {
        let menu = display::sub_menu(
            "BOOK SEARCH",
            &[
                ("d", "display all books"),
                ("f", "search for a book"),
                ("e", "go back to the Main Menu"),
            ],
        );
        loop {
            match self.prompter.choose(&menu)?.as_str() {
                "e" => return Ok(()),
                "f" => {
                    let id =
                        self.ask_book_id("\nPlease enter the ID of the book you'd like to search")?;
                    if let Some(book) = self.find_or_report(id)? {
                        self.prompter.say(&display::book_details(&book))?;
                    }
                }
                "d" => {
                    let books = self.service.list_books()?;
                    self.prompter.say(&display::catalog_table(&books))?;
                }
                _ => self.prompter.say(display::INVALID_MENU_OPTION)?,
            }
        }
    }

    /// Edit-before-save loop shared by enter and update.
    fn review(&mut self, target: ReviewTarget, mut draft: BookDraft) -> CliResult<Review> {
        let (heading, id) = match target {
            ReviewTarget::New => ("Are you happy with the below details?\n\nNEW BOOK ENTRY", None),
            ReviewTarget::Existing(id) => ("EDITING BOOK ENTRY", Some(id)),
        };
        loop {
            let screen = display::review_screen(heading, id, &draft);
            let choice = self.prompter.choose_from(
                &screen,
                display::INVALID_OPTION_RETRY,
                &["1", "2", "3", "y", "n"],
            )?;
            match choice {
                "y" => return Ok(Review::Save(draft)),
                "n" => return Ok(Review::Cancel),
                "1" => draft.title = self.prompter.ask("\nEdit title:")?,
                "2" => draft.author = self.prompter.ask("\nEdit author:")?,
                _ => draft.qty = self.ask_quantity("\nEdit quantity:")?,
            }
            if id.is_some() {
                self.prompter.say(display::CONFIRM_DETAILS_BELOW)?;
            }
        }
    }

    fn find_or_report(&mut self, id: BookId) -> CliResult<Option<Book>> {
        let found = self.service.find_book(id)?;
        if found.is_none() {
            self.prompter.say(&display::banner(display::NOT_FOUND))?;
        }
        Ok(found)
    }

    fn ask_quantity(&mut self, message: &str) -> io::Result<u32> {
        self.prompter
            .ask_until(message, display::DIGITS_ONLY_RETRY, |answer| {
                parse_quantity(answer).ok()
            })
    }

    fn ask_book_id(&mut self, message: &str) -> io::Result<BookId> {
        self.prompter
            .ask_until(message, display::DIGITS_ONLY_RETRY, |answer| {
                parse_book_id(answer).ok()
            })
    }
}

/// Logs a fatal shell error before it terminates the process.
pub fn report_fatal(err: &CliError) {
    error!("event=shell_exit module=cli status=error error={err}");
}
