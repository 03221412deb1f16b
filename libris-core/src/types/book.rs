//! The Book row type and the Books table

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lifecycle state of a book in the local inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Issued,
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Issued => write!(f, "Issued"),
        }
    }
}

/// One row of the Books table
///
/// The serde renames pin the canonical column names of the persisted file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Operator-supplied unique identifier
    #[serde(rename = "BookID")]
    pub id: String,

    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Author")]
    pub author: String,

    #[serde(rename = "Status")]
    pub status: BookStatus,

    /// Stored cover image, if one was uploaded
    #[serde(rename = "ImagePath")]
    pub image_path: Option<PathBuf>,
}

impl Book {
    /// Canonical column order of the Books table
    pub const COLUMNS: [&'static str; 5] = ["BookID", "Title", "Author", "Status", "ImagePath"];

    /// Create a new available book with no cover image
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            status: BookStatus::Available,
            image_path: None,
        }
    }
}

/// The Books table, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookTable(Vec<Book>);

impl BookTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the first row with the given ID
    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.0.iter().find(|b| b.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Append a row at the end of the table
    pub fn insert(&mut self, book: Book) {
        self.0.push(book);
    }

    /// Remove the first row with the given ID, returning it
    pub fn remove(&mut self, id: &str) -> Option<Book> {
        let index = self.0.iter().position(|b| b.id == id)?;
        Some(self.0.remove(index))
    }

    /// Set the status of every row matching the ID
    ///
    /// Matching zero rows is not an error; callers that need the row to
    /// exist check presence first.
    pub fn update_status(&mut self, id: &str, status: BookStatus) {
        for book in self.0.iter_mut().filter(|b| b.id == id) {
            book.status = status;
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Book> for BookTable {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for BookTable {
    type Item = Book;
    type IntoIter = std::vec::IntoIter<Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
