//! Add command implementation

use anyhow::{Context, Result};
use libris_core::ops::{self, ImageUpload, NewBook};
use std::path::Path;

/// Register a new book, optionally attaching a cover image
pub async fn add(
    data_dir: &Path,
    id: &str,
    title: &str,
    author: &str,
    image: Option<&Path>,
) -> Result<()> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    let upload = match image {
        Some(path) => {
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read image file {}", path.display()))?;
            let filename = path
                .file_name()
                .and_then(|name| name.to_str())
                .context("Image path has no file name")?
                .to_string();
            Some(ImageUpload { filename, bytes })
        }
        None => None,
    };

    let (store, images) = super::open_stores(data_dir);
    let book = ops::add_book(
        &store,
        &images,
        NewBook {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            image: upload,
        },
    )
    .await?;

    println!("Added {}: {} by {}", book.id, book.title, book.author);
    Ok(())
}
