//! Libris Core Library
//!
//! This crate provides the domain types and operations for the Libris book
//! inventory: the record store for the two flat tables, the cover image
//! directory, the inventory operations, and the Open Library lookup client.

pub mod error;
pub mod images;
pub mod ops;
pub mod remote;
pub mod store;
pub mod types;

pub use error::{InventoryError, LibrisError, RemoteError, Result, StoreError};
pub use images::ImageStore;
pub use remote::{OpenLibraryClient, RemoteBook, RemoteEndpoints};
pub use store::{CsvRecordStore, Inventory, MemoryRecordStore, RecordStore};
pub use types::{Book, BookStatus, BookTable, IssuedLoan, LoanTable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new("B1", "Dune", "Frank Herbert");
        assert_eq!(book.id, "B1");
        assert_eq!(book.status, BookStatus::Available);
    }
}
