//! Record store for the two inventory tables
//!
//! The durable form is one CSV file per table, each with a header row of
//! canonical column names. There is no caching and no diffing: every load
//! reads both files whole, every save rewrites them whole.

use crate::error::StoreError;
use crate::types::{Book, BookTable, IssuedLoan, LoanTable};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result type for record store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// The in-memory working set: both tables as loaded from storage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    pub books: BookTable,
    pub loans: LoanTable,
}

/// Persistence boundary for the inventory tables
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read both tables; absent storage yields empty tables, never an error
    async fn load(&self) -> StoreResult<Inventory>;

    /// Overwrite both tables from the working set
    async fn save(&self, inventory: &Inventory) -> StoreResult<()>;
}

/// Flat-file record store: one CSV file per table under a data directory
pub struct CsvRecordStore {
    books_path: PathBuf,
    loans_path: PathBuf,
}

impl CsvRecordStore {
    pub const BOOKS_FILE: &'static str = "books.csv";
    pub const LOANS_FILE: &'static str = "issued_books.csv";

    /// Create a store rooted at the given data directory
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            books_path: data_dir.join(Self::BOOKS_FILE),
            loans_path: data_dir.join(Self::LOANS_FILE),
        }
    }
}

#[async_trait]
impl RecordStore for CsvRecordStore {
    async fn load(&self) -> StoreResult<Inventory> {
        let books: Vec<Book> = decode_table(&read_or_empty(&self.books_path).await?)?;
        let loans: Vec<IssuedLoan> = decode_table(&read_or_empty(&self.loans_path).await?)?;

        Ok(Inventory {
            books: books.into_iter().collect(),
            loans: loans.into_iter().collect(),
        })
    }

    async fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        let books = encode_table(&Book::COLUMNS, inventory.books.iter())?;
        let loans = encode_table(&IssuedLoan::COLUMNS, inventory.loans.iter())?;

        write_atomic(&self.books_path, &books).await?;
        write_atomic(&self.loans_path, &loans).await?;
        Ok(())
    }
}

/// Read a table file, treating a missing file as an empty table
async fn read_or_empty(path: &Path) -> StoreResult<Vec<u8>> {
    match tokio::fs::read(path).await {
        Ok(data) => Ok(data),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(StoreError::Io(e)),
    }
}

/// Replace a table file atomically
/// Writes to a temp file then renames to avoid partial writes
async fn write_atomic(path: &Path, data: &[u8]) -> StoreResult<()> {
    // Temp file in the same directory (ensures same filesystem for rename)
    let temp_path = path.with_extension("csv.tmp");
    tokio::fs::write(&temp_path, data).await?;
    tokio::fs::rename(&temp_path, path).await?;
    Ok(())
}

fn decode_table<T: DeserializeOwned>(data: &[u8]) -> StoreResult<Vec<T>> {
    let mut reader = csv::Reader::from_reader(data);
    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(StoreError::from)
}

/// Encode rows with an explicit header, so an empty table still carries
/// the canonical column names
fn encode_table<'a, T>(
    columns: &[&str],
    rows: impl IntoIterator<Item = &'a T>,
) -> StoreResult<Vec<u8>>
where
    T: Serialize + 'a,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| StoreError::Codec(e.into_error()))
}

/// In-memory record store (for testing)
#[derive(Default)]
pub struct MemoryRecordStore {
    inventory: std::sync::RwLock<Inventory>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn load(&self) -> StoreResult<Inventory> {
        Ok(self.inventory.read().unwrap().clone())
    }

    async fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        *self.inventory.write().unwrap() = inventory.clone();
        Ok(())
    }
}
