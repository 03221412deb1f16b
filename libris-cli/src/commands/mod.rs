//! Command implementations

mod add;
mod delete;
mod issue;
mod list;
mod search;

pub use add::add;
pub use delete::delete;
pub use issue::{issue, return_book};
pub use list::list;
pub use search::search;

use libris_core::store::CsvRecordStore;
use libris_core::ImageStore;
use std::path::{Path, PathBuf};

/// Directory under the data dir holding uploaded covers
pub const IMAGES_DIR: &str = "book_images";

/// Resolve the data directory: flag, then environment, then default
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var("LIBRIS_DATA_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("./libris_data"))
}

/// Open the record store and image directory under `data_dir`
pub(crate) fn open_stores(data_dir: &Path) -> (CsvRecordStore, ImageStore) {
    (
        CsvRecordStore::new(data_dir),
        ImageStore::new(data_dir.join(IMAGES_DIR)),
    )
}
