//! Terminal rendering for menus, banners, record cards and the catalog table.

use bookstore_core::{Book, BookDraft, BookId};

const RULE: &str = "___________________________________________________________";
const DOUBLE_RULE: &str = "==========================================================";

pub const INVALID_MENU_OPTION: &str = "\nPLEASE ENTER A VALID OPTION FROM THE MENU";
pub const INVALID_OPTION_RETRY: &str = "\nPlease enter a valid option:";
pub const DIGITS_ONLY_RETRY: &str = "\nPlease enter only digits:";
pub const YES_NO_RETRY: &str = "\nInvalid entry. Indicate y (Yes) or n (No)";
pub const CONFIRM_DETAILS_BELOW: &str = "\nCONFIRM DETAILS BELOW";

pub const NO_DATA: &str = "NO DATA EXISTS -- PLEASE CREATE A NEW ENTRY FIRST";
pub const NOT_FOUND: &str = "BOOK ID NOT FOUND";
pub const BOOK_UPDATED: &str = "BOOK UPDATED!";
pub const OPERATION_CANCELLED: &str = "OPERATION CANCELLED";
pub const LOGGED_OUT: &str = "YOU HAVE BEEN LOGGED OUT";

/// A message framed by horizontal rules.
pub fn banner(message: &str) -> String {
    format!("\n{RULE}\n\n{message}\n{RULE}")
}

pub fn main_menu() -> String {
    format!(
        "\n{DOUBLE_RULE}\n\n        +++++++++ eBOOK DATABASE +++++++++\n\n{DOUBLE_RULE}\n\n    MENU\n\n        PRESS (1) Enter Book\n\n        PRESS (2) Update Book\n\n        PRESS (3) Delete Book\n\n        PRESS (4) Search Books\n\n    EXIT (e)\n{RULE}\n"
    )
}

/// Sub-menu with a heading and `(key, description)` lines.
pub fn sub_menu(heading: &str, options: &[(&str, &str)]) -> String {
    let mut out = format!("\n{RULE}\n\n{heading}\n\n");
    for (key, action) in options {
        out.push_str(&format!("Press \"{key}\" to {action}.\n"));
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

pub fn book_added(id: BookId) -> String {
    banner(&format!("NEW BOOK ADDED! (ID {id})"))
}

pub fn book_deleted(id: BookId) -> String {
    banner(&format!("BOOK WITH ID -- {id} -- DELETED!"))
}

/// Review screen shown before saving a new or edited record.
pub fn review_screen(heading: &str, id: Option<BookId>, draft: &BookDraft) -> String {
    let mut out = format!("\n{RULE}\n\n{heading}\n\n");
    if let Some(id) = id {
        out.push_str(&format!("ID No. {id}\n\n"));
    }
    out.push_str(&format!(
        "Title:              {}\n                    [To edit: Press \"1\"]\n\n",
        draft.title
    ));
    out.push_str(&format!(
        "Author:             {}\n                    [To edit: Press \"2\"]\n\n",
        draft.author
    ));
    out.push_str(&format!(
        "Quantity in stock:  {}\n                    [To edit: Press \"3\"]\n\n",
        draft.qty
    ));
    out.push_str("Press \"y\" to save details\nPress \"n\" to cancel entry\n");
    out.push_str(RULE);
    out.push('\n');
    out
}

pub fn book_details(book: &Book) -> String {
    format!(
        "\n{RULE}\n\nBOOK DETAILS\n\nID No. {}\n\nTitle:              {}\n\nAuthor:             {}\n\nQuantity in stock:  {}\n{RULE}",
        book.id, book.title, book.author, book.qty
    )
}

pub fn delete_confirmation(book: &Book) -> String {
    format!(
        "\nAre you sure you want to delete book with ID {}?\n\nTitle:  {}\nAuthor: {}\nQty:    {}\n\n[Indicate y (Yes) or n (No)]",
        book.id, book.title, book.author, book.qty
    )
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

/// Renders all records as a boxed grid, one bordered row per record.
pub fn catalog_table(books: &[Book]) -> String {
    const HEADERS: [&str; 4] = ["ID", "Title", "Author", "Qty"];
    const ALIGN: [Align; 4] = [Align::Right, Align::Left, Align::Left, Align::Right];

    let rows: Vec<[String; 4]> = books
        .iter()
        .map(|book| {
            [
                book.id.to_string(),
                book.title.clone(),
                book.author.clone(),
                book.qty.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(str::to_string);
    let mut out = String::from("\nDISPLAYING ALL BOOKS\n(excludes deleted records)\n\n");
    out.push_str(&border(&widths, '╒', '═', '╤', '╕'));
    out.push_str(&row_line(&header, &widths, &ALIGN));
    out.push_str(&border(&widths, '╞', '═', '╪', '╡'));
    for (index, row) in rows.iter().enumerate() {
        out.push_str(&row_line(row, &widths, &ALIGN));
        if index + 1 < rows.len() {
            out.push_str(&border(&widths, '├', '─', '┼', '┤'));
        }
    }
    out.push_str(&border(&widths, '╘', '═', '╧', '╛'));
    out
}

fn border(widths: &[usize; 4], left: char, fill: char, join: char, right: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|width| fill.to_string().repeat(width + 2))
        .collect();
    format!("{left}{}{right}\n", segments.join(&join.to_string()))
}

fn row_line(cells: &[String; 4], widths: &[usize; 4], align: &[Align; 4]) -> String {
    let mut out = String::from("│");
    for ((cell, width), align) in cells.iter().zip(widths).zip(align) {
        let pad = width - cell.chars().count();
        match align {
            Align::Left => out.push_str(&format!(" {cell}{} │", " ".repeat(pad))),
            Align::Right => out.push_str(&format!(" {}{cell} │", " ".repeat(pad))),
        }
    }
    out.push('\n');
    out
}
