//! List command implementation

use anyhow::Result;
use libris_core::ops;
use serde::Serialize;
use std::path::Path;

/// Book row as printed or serialized
#[derive(Serialize)]
struct BookRow {
    id: String,
    title: String,
    author: String,
    status: String,

    /// Only set while the stored file actually exists
    #[serde(skip_serializing_if = "Option::is_none")]
    image_path: Option<String>,
}

/// Loan row as printed or serialized
#[derive(Serialize)]
struct LoanRow {
    book_id: String,
    title: String,
    issued_to: String,
    status: String,
}

/// List the local inventory, or the loans table with `--loans`
pub async fn list(data_dir: &Path, loans: bool, json: bool) -> Result<()> {
    if loans {
        list_loans(data_dir, json).await
    } else {
        list_books(data_dir, json).await
    }
}

async fn list_books(data_dir: &Path, json: bool) -> Result<()> {
    let (store, _images) = super::open_stores(data_dir);
    let books = ops::list_books(&store).await?;

    let mut rows = Vec::with_capacity(books.len());
    for book in books {
        // Covers are shown only while the file is still on disk
        let image_path = match &book.image_path {
            Some(path) if tokio::fs::try_exists(path).await.unwrap_or(false) => {
                Some(path.display().to_string())
            }
            _ => None,
        };
        rows.push(BookRow {
            id: book.id,
            title: book.title,
            author: book.author,
            status: book.status.to_string(),
            image_path,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No local books added yet.");
        return Ok(());
    }

    for row in rows {
        println!("Book ID: {}", row.id);
        println!("Title:   {}", row.title);
        println!("Author:  {}", row.author);
        println!("Status:  {}", row.status);
        if let Some(path) = row.image_path {
            println!("Image:   {}", path);
        }
        println!("---");
    }
    Ok(())
}

async fn list_loans(data_dir: &Path, json: bool) -> Result<()> {
    let (store, _images) = super::open_stores(data_dir);
    let loans = ops::list_loans(&store).await?;

    let rows: Vec<LoanRow> = loans
        .into_iter()
        .map(|loan| LoanRow {
            book_id: loan.book_id,
            title: loan.title,
            issued_to: loan.issued_to,
            status: loan.status.to_string(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No books currently issued.");
        return Ok(());
    }

    for row in rows {
        println!("Book ID:   {}", row.book_id);
        println!("Title:     {}", row.title);
        println!("Issued To: {}", row.issued_to);
        println!("Status:    {}", row.status);
        println!("---");
    }
    Ok(())
}
