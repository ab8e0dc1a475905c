use bookstore_core::{
    open_store_in_memory, BookDraft, BookId, BookRepository, BookService, DeleteOutcome,
    RepoError, SqliteBookRepository, SEED_ID,
};
use rusqlite::Connection;

fn dune() -> BookDraft {
    BookDraft::new("Dune", "Herbert", 5)
}

#[test]
fn first_create_on_fresh_store_gets_seed_id() {
    let conn = open_store_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));

    let id = service.create_book(&dune()).unwrap();
    assert_eq!(id, BookId(SEED_ID));

    let loaded = service.find_book(BookId(3001)).unwrap().unwrap();
    assert_eq!(loaded.id, BookId(3001));
    assert_eq!(loaded.title, "Dune");
    assert_eq!(loaded.author, "Herbert");
    assert_eq!(loaded.qty, 5);
}

#[test]
fn create_then_get_preserves_fields() {
    let conn = open_store_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));

    let drafts = [
        BookDraft::new("", "", 0),
        BookDraft::new("A Tale of Two Cities", "Charles Dickens", 40),
        BookDraft::new("Der Zauberberg", "Thomas Mann", u32::MAX),
        BookDraft::new("'; DROP TABLE book; --", "O'Brien", 7),
    ];

    for draft in &drafts {
        let id = service.create_book(draft).unwrap();
        let loaded = service.find_book(id).unwrap().unwrap();
        assert_eq!(loaded.to_draft(), *draft);
    }
}

#[test]
fn ids_increment_and_are_never_reused_after_delete() {
    let conn = open_store_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));

    let first = service.create_book(&dune()).unwrap();
    let second = service
        .create_book(&BookDraft::new("Emma", "Austen", 2))
        .unwrap();
    assert_eq!(second, BookId(3002));

    let outcome = service
        .delete_book::<_, RepoError>(second, |_| Ok(true))
        .unwrap();
    assert!(matches!(outcome, DeleteOutcome::Deleted(book) if book.id == second));

    let third = service
        .create_book(&BookDraft::new("Ulysses", "Joyce", 1))
        .unwrap();
    assert_eq!(third, BookId(3003));
    assert!(service.find_book(second).unwrap().is_none());
    assert!(service.find_book(first).unwrap().is_some());
}

#[test]
fn list_returns_records_in_id_order() {
    let conn = open_store_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));

    for title in ["c", "a", "b"] {
        service
            .create_book(&BookDraft::new(title, "anon", 1))
            .unwrap();
    }

    let ids: Vec<i64> = service
        .list_books()
        .unwrap()
        .into_iter()
        .map(|book| book.id.get())
        .collect();
    assert_eq!(ids, vec![3001, 3002, 3003]);
}

#[test]
fn update_overwrites_all_fields_and_is_idempotent() {
    let conn = open_store_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));

    let id = service.create_book(&dune()).unwrap();
    let revised = BookDraft::new("Dune Messiah", "Frank Herbert", 9);

    service.update_book(id, &revised).unwrap();
    let after_first = service.find_book(id).unwrap().unwrap();
    service.update_book(id, &revised).unwrap();
    let after_second = service.find_book(id).unwrap().unwrap();

    assert_eq!(after_first, after_second);
    assert_eq!(after_second.to_draft(), revised);
}

#[test]
fn update_missing_id_is_silent_noop() {
    let conn = open_store_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));
    service.create_book(&dune()).unwrap();

    service
        .update_book(BookId(9999), &BookDraft::new("x", "y", 1))
        .unwrap();

    assert!(service.find_book(BookId(9999)).unwrap().is_none());
    assert_eq!(service.list_books().unwrap().len(), 1);
}

#[test]
fn delete_declined_keeps_record_unchanged() {
    let conn = open_store_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));
    let id = service.create_book(&dune()).unwrap();
    let before = service.find_book(id).unwrap().unwrap();

    let outcome = service
        .delete_book::<_, RepoError>(id, |_| Ok(false))
        .unwrap();

    assert_eq!(outcome, DeleteOutcome::Cancelled(before.clone()));
    assert_eq!(service.find_book(id).unwrap(), Some(before));
}

#[test]
fn delete_confirmed_removes_record() {
    let conn = open_store_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));
    let id = service.create_book(&dune()).unwrap();

    let outcome = service
        .delete_book::<_, RepoError>(id, |book| {
            assert_eq!(book.title, "Dune");
            Ok(true)
        })
        .unwrap();

    assert!(matches!(outcome, DeleteOutcome::Deleted(_)));
    assert!(service.find_book(id).unwrap().is_none());
}

#[test]
fn delete_missing_id_never_asks_for_confirmation() {
    let conn = open_store_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));
    service.create_book(&dune()).unwrap();

    let outcome = service
        .delete_book::<_, RepoError>(BookId(9999), |_| {
            panic!("confirmation must not be requested for a missing id")
        })
        .unwrap();

    assert_eq!(outcome, DeleteOutcome::NotFound(BookId(9999)));
}

#[test]
fn repository_delete_missing_id_returns_not_found() {
    let conn = open_store_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);
    repo.initialize_store().unwrap();

    let err = repo.delete_book(BookId(9999)).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(BookId(9999))));
}

#[test]
fn get_unknown_id_is_not_found_without_error() {
    let conn = open_store_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));
    service.create_book(&dune()).unwrap();

    assert!(service.find_book(BookId(9999)).unwrap().is_none());
}

#[test]
fn negative_persisted_quantity_is_invalid_data() {
    let conn = Connection::open_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);
    repo.initialize_store().unwrap();
    conn.execute(
        "INSERT INTO book (title, author, qty) VALUES ('Bad', 'Row', -3);",
        [],
    )
    .unwrap();

    let err = repo.get_book(BookId(SEED_ID)).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn book_serializes_with_plain_id() {
    let book = dune().into_book(BookId(3001));
    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"id": 3001, "title": "Dune", "author": "Herbert", "qty": 5})
    );
}

#[test]
fn reads_on_store_without_table_are_empty_not_errors() {
    let conn = open_store_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    assert!(repo.get_book(BookId(9999)).unwrap().is_none());
    assert!(repo.get_book(BookId(SEED_ID)).unwrap().is_none());
    assert!(repo.list_books().unwrap().is_empty());
}

#[test]
fn writes_on_store_without_table_do_not_create_it() {
    let conn = open_store_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    repo.update_book(BookId(SEED_ID), &dune()).unwrap();
    let err = repo.delete_book(BookId(SEED_ID)).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(BookId(SEED_ID))));
    assert!(!bookstore_core::db::book_table_exists(&conn).unwrap());
}

#[test]
fn delete_on_store_without_table_reports_not_found() {
    let conn = open_store_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));

    let outcome = service
        .delete_book::<_, RepoError>(BookId(9999), |_| {
            panic!("confirmation must not be requested without a table")
        })
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::NotFound(BookId(9999)));
}
