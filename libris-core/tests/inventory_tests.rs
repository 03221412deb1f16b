//! End-to-end inventory tests over the flat-file store

use libris_core::ops::{self, ImageUpload, NewBook};
use libris_core::store::{CsvRecordStore, RecordStore};
use libris_core::types::BookStatus;
use libris_core::ImageStore;
use tempfile::TempDir;

fn new_book(id: &str, title: &str, author: &str) -> NewBook {
    NewBook {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        image: None,
    }
}

#[tokio::test]
async fn test_full_lending_cycle_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let store = CsvRecordStore::new(temp_dir.path());
    let images = ImageStore::new(temp_dir.path().join("book_images"));

    // Add
    ops::add_book(&store, &images, new_book("B1", "Dune", "Frank Herbert"))
        .await
        .unwrap();
    let inventory = store.load().await.unwrap();
    assert_eq!(inventory.books.len(), 1);
    assert_eq!(
        inventory.books.find_by_id("B1").unwrap().status,
        BookStatus::Available
    );

    // Issue
    ops::issue_book(&store, "B1", "Alice").await.unwrap();
    let inventory = store.load().await.unwrap();
    assert_eq!(
        inventory.books.find_by_id("B1").unwrap().status,
        BookStatus::Issued
    );
    let loan = inventory.loans.find_by_book("B1").unwrap();
    assert_eq!(loan.title, "Dune");
    assert_eq!(loan.issued_to, "Alice");
    assert_eq!(loan.status, BookStatus::Issued);

    // Return
    ops::return_book(&store, "B1").await.unwrap();
    let inventory = store.load().await.unwrap();
    assert_eq!(
        inventory.books.find_by_id("B1").unwrap().status,
        BookStatus::Available
    );
    assert!(inventory.loans.is_empty());
}

#[tokio::test]
async fn test_state_survives_store_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let images = ImageStore::new(temp_dir.path().join("book_images"));

    {
        let store = CsvRecordStore::new(temp_dir.path());
        ops::add_book(&store, &images, new_book("B1", "Dune", "Frank Herbert"))
            .await
            .unwrap();
        ops::issue_book(&store, "B1", "Alice").await.unwrap();
    }

    // A fresh store over the same directory sees the same tables
    let store = CsvRecordStore::new(temp_dir.path());
    let inventory = store.load().await.unwrap();
    assert_eq!(
        inventory.books.find_by_id("B1").unwrap().status,
        BookStatus::Issued
    );
    assert_eq!(inventory.loans.find_by_book("B1").unwrap().issued_to, "Alice");
}

#[tokio::test]
async fn test_fields_with_commas_survive_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = CsvRecordStore::new(temp_dir.path());
    let images = ImageStore::new(temp_dir.path().join("book_images"));

    ops::add_book(
        &store,
        &images,
        new_book("B1", "Dune, Messiah", "Herbert, Frank"),
    )
    .await
    .unwrap();

    let books = ops::list_books(&store).await.unwrap();
    assert_eq!(books[0].title, "Dune, Messiah");
    assert_eq!(books[0].author, "Herbert, Frank");
}

#[tokio::test]
async fn test_delete_cleans_image_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let store = CsvRecordStore::new(temp_dir.path());
    let images = ImageStore::new(temp_dir.path().join("book_images"));

    let mut new = new_book("B1", "Dune", "Frank Herbert");
    new.image = Some(ImageUpload {
        filename: "dune.jpg".to_string(),
        bytes: b"jpeg-bytes".to_vec(),
    });
    let book = ops::add_book(&store, &images, new).await.unwrap();
    let image_path = book.image_path.unwrap();
    assert!(image_path.exists());

    ops::delete_book(&store, &images, "B1").await.unwrap();
    assert!(!image_path.exists());
    assert!(ops::list_books(&store).await.unwrap().is_empty());
}
