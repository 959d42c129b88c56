use ebookstore::db::{fetch_book, fetch_books, insert_book, table_exists};
use ebookstore::models::SEED_BOOKS;
use ebookstore::{bootstrap, startup, Book, Bootstrap, Config, Store};

#[test]
fn fresh_file_is_created_and_seeded() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_db_path(dir.path().join("ebookstore.db"));

    let mut store = Store::open(&config.db_path).unwrap();
    assert!(!table_exists(store.conn(), "books").unwrap());
    assert_eq!(bootstrap(&mut store).unwrap(), Bootstrap::Created);

    let books = fetch_books(store.conn()).unwrap();
    assert_eq!(books.len(), SEED_BOOKS.len());
    assert_eq!(
        fetch_book(store.conn(), 3002).unwrap(),
        Some(Book::new(
            3002,
            "Harry Potter and the Philosophers Stone",
            "J.K. Rowling",
            40
        ))
    );
    store.close().unwrap();
}

#[test]
fn reopening_keeps_data_and_never_duplicates_seeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ebookstore.db");

    let mut store = Store::open(&path).unwrap();
    bootstrap(&mut store).unwrap();
    store
        .write(|tx| insert_book(tx, &Book::new(42, "Dune", "Frank Herbert", 7)))
        .unwrap();
    store.close().unwrap();

    for _ in 0..2 {
        let mut store = Store::open(&path).unwrap();
        assert_eq!(bootstrap(&mut store).unwrap(), Bootstrap::AlreadyPresent);
        let books = fetch_books(store.conn()).unwrap();
        assert_eq!(books.len(), SEED_BOOKS.len() + 1);
        assert!(books.contains(&Book::new(42, "Dune", "Frank Herbert", 7)));
        store.close().unwrap();
    }
}

#[test]
fn bootstrap_leaves_edited_seed_rows_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ebookstore.db");

    let mut store = Store::open(&path).unwrap();
    bootstrap(&mut store).unwrap();
    store
        .conn()
        .execute("UPDATE books SET title = 'Edited' WHERE id = 3004", [])
        .unwrap();
    store.close().unwrap();

    let mut store = Store::open(&path).unwrap();
    bootstrap(&mut store).unwrap();
    assert_eq!(
        fetch_book(store.conn(), 3004).unwrap().unwrap().title,
        "Edited"
    );
}

#[test]
fn creation_is_announced_only_on_the_first_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ebookstore.db");

    let mut first = Vec::new();
    let mut store = Store::open(&path).unwrap();
    assert_eq!(startup(&mut store, &mut first).unwrap(), Bootstrap::Created);
    store.close().unwrap();
    assert_eq!(String::from_utf8(first).unwrap(), "Database created successfully!\n");

    let mut second = Vec::new();
    let mut store = Store::open(&path).unwrap();
    assert_eq!(
        startup(&mut store, &mut second).unwrap(),
        Bootstrap::AlreadyPresent
    );
    store.close().unwrap();
    assert!(second.is_empty());
}
