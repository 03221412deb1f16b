//! Application state

use anyhow::Result;
use libris_core::remote::{OpenLibraryClient, RemoteEndpoints};
use libris_core::store::{CsvRecordStore, RecordStore};
use libris_core::ImageStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state
///
/// Holds no table data: every handler loads the working set from the
/// record store and writes it back, so simultaneous mutations race
/// last-writer-wins. Single-operator scope.
#[derive(Clone)]
pub struct AppState {
    /// Record store for the two inventory tables
    pub store: Arc<dyn RecordStore>,

    /// Cover image directory
    pub images: Arc<ImageStore>,

    /// Open Library lookup client
    pub remote: OpenLibraryClient,

    /// Base path for inventory data
    pub data_dir: PathBuf,
}

impl AppState {
    /// Directory under the data dir holding uploaded covers
    pub const IMAGES_DIR: &'static str = "book_images";

    /// Create new application state
    pub async fn new() -> Result<Self> {
        let data_dir =
            std::env::var("LIBRIS_DATA_DIR").unwrap_or_else(|_| "./libris_data".to_string());
        let data_dir = PathBuf::from(data_dir);

        // Create storage directories
        tokio::fs::create_dir_all(&data_dir).await?;
        tokio::fs::create_dir_all(data_dir.join(Self::IMAGES_DIR)).await?;

        let remote = OpenLibraryClient::with_endpoints(RemoteEndpoints::from_env())?;

        Ok(Self {
            store: Arc::new(CsvRecordStore::new(&data_dir)),
            images: Arc::new(ImageStore::new(data_dir.join(Self::IMAGES_DIR))),
            remote,
            data_dir,
        })
    }
}
