//! Inventory operations
//!
//! Each operation is one full interaction: load the working set from the
//! record store, validate, mutate, persist, return. Validation runs before
//! any mutation, so a failure leaves the durable tables untouched.

use crate::error::{InventoryError, Result};
use crate::images::ImageStore;
use crate::store::RecordStore;
use crate::types::{Book, BookStatus, IssuedLoan};

/// An uploaded cover image: original filename plus raw bytes
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Request to register a new book
#[derive(Debug, Clone)]
pub struct NewBook {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: Option<ImageUpload>,
}

/// Check that an ID is safe to use as an image filename stem
/// Prevents path traversal through operator-supplied IDs
fn validate_id(id: &str) -> std::result::Result<(), InventoryError> {
    if id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        Err(InventoryError::Validation(format!(
            "book ID '{}' may only contain letters, digits, '-' and '_'",
            id
        )))
    }
}

/// Register a new book, storing its cover image if one was uploaded
///
/// The new row starts out `Available`. IDs must be unique; re-using one
/// fails with `DuplicateKey` and changes nothing.
pub async fn add_book(
    store: &dyn RecordStore,
    images: &ImageStore,
    new: NewBook,
) -> Result<Book> {
    if new.id.trim().is_empty() || new.title.trim().is_empty() || new.author.trim().is_empty() {
        return Err(
            InventoryError::Validation("book ID, title and author are all required".to_string())
                .into(),
        );
    }
    validate_id(&new.id)?;

    let mut inventory = store.load().await?;
    if inventory.books.contains(&new.id) {
        return Err(InventoryError::DuplicateKey(new.id).into());
    }

    let mut book = Book::new(new.id, new.title, new.author);
    if let Some(upload) = new.image {
        let path = images.store(&book.id, &upload.bytes, &upload.filename).await?;
        book.image_path = Some(path);
    }

    inventory.books.insert(book.clone());
    store.save(&inventory).await?;
    Ok(book)
}

/// Remove a book and its stored cover image
///
/// The tables are persisted before the image file is deleted, so a failed
/// delete can leave a stray image but never a row pointing at nothing.
/// Loan rows are left alone: deleting an issued book leaves its loan
/// behind, and `return_book` tolerates that orphan.
pub async fn delete_book(
    store: &dyn RecordStore,
    images: &ImageStore,
    id: &str,
) -> Result<Book> {
    let mut inventory = store.load().await?;
    let book = match inventory.books.remove(id) {
        Some(book) => book,
        None => return Err(InventoryError::NotFound(id.to_string()).into()),
    };

    store.save(&inventory).await?;

    if let Some(path) = &book.image_path {
        images.remove(path).await?;
    }
    Ok(book)
}

/// Issue a book to a borrower
///
/// Appends a loan row copying the book's title at this instant and flips
/// the book to `Issued`.
pub async fn issue_book(
    store: &dyn RecordStore,
    id: &str,
    issued_to: &str,
) -> Result<IssuedLoan> {
    if issued_to.trim().is_empty() {
        return Err(InventoryError::Validation("borrower name is required".to_string()).into());
    }

    let mut inventory = store.load().await?;
    let book = match inventory.books.find_by_id(id) {
        Some(book) => book,
        None => return Err(InventoryError::NotFound(id.to_string()).into()),
    };
    if book.status == BookStatus::Issued {
        return Err(InventoryError::AlreadyIssued(id.to_string()).into());
    }

    let loan = IssuedLoan::new(book, issued_to);
    inventory.books.update_status(id, BookStatus::Issued);
    inventory.loans.insert(loan.clone());
    store.save(&inventory).await?;
    Ok(loan)
}

/// Return a previously issued book
///
/// Only the loan row is required to exist: the status flip matches zero
/// book rows when the book was deleted while issued.
pub async fn return_book(store: &dyn RecordStore, id: &str) -> Result<()> {
    let mut inventory = store.load().await?;
    if inventory.loans.find_by_book(id).is_none() {
        return Err(InventoryError::NotIssued(id.to_string()).into());
    }

    inventory.books.update_status(id, BookStatus::Available);
    inventory.loans.remove_by_book(id);
    store.save(&inventory).await?;
    Ok(())
}

/// List the local inventory in table order
pub async fn list_books(store: &dyn RecordStore) -> Result<Vec<Book>> {
    let inventory = store.load().await?;
    Ok(inventory.books.into_iter().collect())
}

/// List the active loans in table order
pub async fn list_loans(store: &dyn RecordStore) -> Result<Vec<IssuedLoan>> {
    let inventory = store.load().await?;
    Ok(inventory.loans.into_iter().collect())
}
