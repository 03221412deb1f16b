//! Search command implementation

use anyhow::Result;
use libris_core::remote::{OpenLibraryClient, RemoteBook, RemoteEndpoints};
use serde::Serialize;

/// Remote result as printed or serialized
#[derive(Serialize)]
struct SearchRow {
    title: String,
    author: String,
    first_publish_year: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    cover_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    detail_url: Option<String>,
}

impl From<RemoteBook> for SearchRow {
    fn from(book: RemoteBook) -> Self {
        Self {
            first_publish_year: book.publish_year_display(),
            title: book.title,
            author: book.author,
            cover_url: book.cover_url,
            detail_url: book.detail_url,
        }
    }
}

/// Search the Open Library catalog by free-text term
pub async fn search(term: &str, json: bool) -> Result<()> {
    let client = OpenLibraryClient::with_endpoints(RemoteEndpoints::from_env())?;
    let results = client.search(term).await?;

    let rows: Vec<SearchRow> = results.into_iter().map(Into::into).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No books found for '{}'.", term);
        return Ok(());
    }

    for row in rows {
        println!("Title:        {}", row.title);
        println!("Author:       {}", row.author);
        println!("Publish Year: {}", row.first_publish_year);
        if let Some(url) = row.cover_url {
            println!("Cover:        {}", url);
        }
        if let Some(url) = row.detail_url {
            println!("Details:      {}", url);
        }
        println!("---");
    }
    Ok(())
}
