//! Issue and return command implementations

use anyhow::Result;
use libris_core::ops;
use std::path::Path;

/// Issue a book to a borrower
pub async fn issue(data_dir: &Path, id: &str, to: &str) -> Result<()> {
    let (store, _images) = super::open_stores(data_dir);
    let loan = ops::issue_book(&store, id, to).await?;

    println!("Issued {}: {} to {}", loan.book_id, loan.title, loan.issued_to);
    Ok(())
}

/// Return a previously issued book
pub async fn return_book(data_dir: &Path, id: &str) -> Result<()> {
    let (store, _images) = super::open_stores(data_dir);
    ops::return_book(&store, id).await?;

    println!("Returned {}", id);
    Ok(())
}
