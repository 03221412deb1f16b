//! Cover image asset manager
//!
//! Uploaded covers live in a single directory, one file per book, named
//! `<book_id>.<ext>`. Images are optional everywhere; a book without one
//! simply has no file here.

use crate::error::StoreError;
use std::path::{Path, PathBuf};

/// Upload types accepted for covers
const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Stores and deletes uploaded cover images keyed by book ID
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    /// Create a store over the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the stored images
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write uploaded bytes to `<dir>/<book_id>.<ext>`, overwriting any
    /// previous image for that ID
    ///
    /// The extension is the lowercase suffix of the original filename and
    /// must be one of jpg, jpeg or png.
    pub async fn store(
        &self,
        book_id: &str,
        bytes: &[u8],
        original_filename: &str,
    ) -> Result<PathBuf, StoreError> {
        let ext = Path::new(original_filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .ok_or_else(|| {
                StoreError::InvalidFileName(format!("'{}' has no extension", original_filename))
            })?;

        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(StoreError::InvalidFileName(format!(
                "unsupported image type '.{}' (expected jpg, jpeg or png)",
                ext
            )));
        }

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(format!("{}.{}", book_id, ext));
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }

    /// Delete the file at `path` if it exists
    /// A missing file is a no-op, not an error
    pub async fn remove(&self, path: &Path) -> Result<(), StoreError> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}
