//! Delete command implementation

use anyhow::Result;
use libris_core::ops;
use std::path::Path;

/// Delete a book and its stored cover image
pub async fn delete(data_dir: &Path, id: &str) -> Result<()> {
    let (store, images) = super::open_stores(data_dir);
    let book = ops::delete_book(&store, &images, id).await?;

    println!("Deleted {}: {}", book.id, book.title);
    Ok(())
}
