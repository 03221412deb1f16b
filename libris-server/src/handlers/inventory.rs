//! Inventory handlers: the four mutations plus the two listings

use super::{error_response, ApiError, ErrorBody};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use libris_core::ops::{self, ImageUpload, NewBook};
use libris_core::types::{Book, BookStatus, IssuedLoan};
use serde::{Deserialize, Serialize};

/// Book view for list responses
#[derive(Debug, Serialize)]
pub struct BookView {
    pub id: String,
    pub title: String,
    pub author: String,
    pub status: BookStatus,

    /// Relative URL of the stored cover, present only when the file
    /// still exists on disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// List response
#[derive(Debug, Serialize)]
pub struct ListBooksResponse {
    pub books: Vec<BookView>,
    pub total: usize,
}

/// List the local inventory in table order
pub async fn list_books(
    State(state): State<AppState>,
) -> Result<Json<ListBooksResponse>, ApiError> {
    let books = ops::list_books(state.store.as_ref())
        .await
        .map_err(error_response)?;

    let mut views = Vec::with_capacity(books.len());
    for book in books {
        views.push(book_view(book).await);
    }

    let total = views.len();
    Ok(Json(ListBooksResponse {
        books: views,
        total,
    }))
}

/// Build a view, exposing the cover only while its file is on disk
async fn book_view(book: Book) -> BookView {
    let image_url = match &book.image_path {
        Some(path) if tokio::fs::try_exists(path).await.unwrap_or(false) => path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| format!("/images/{}", name)),
        _ => None,
    };

    BookView {
        id: book.id,
        title: book.title,
        author: book.author,
        status: book.status,
        image_url,
    }
}

/// Add response
#[derive(Debug, Serialize)]
pub struct AddBookResponse {
    pub id: String,
    pub title: String,
    pub message: String,
}

/// Register a new book from a multipart form
///
/// Fields: `book_id`, `title`, `author`, and an optional `image` file.
pub async fn add_book(
    State(state): State<AppState>,
    mut multipart: axum_extra::extract::Multipart,
) -> Result<Json<AddBookResponse>, ApiError> {
    let mut book_id = String::new();
    let mut title = String::new();
    let mut author = String::new();
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "book_id" => book_id = field.text().await.map_err(bad_request)?,
            "title" => title = field.text().await.map_err(bad_request)?,
            "author" => author = field.text().await.map_err(bad_request)?,
            "image" => {
                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_default();
                let bytes = field.bytes().await.map_err(bad_request)?;
                image = Some(ImageUpload {
                    filename,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let book = ops::add_book(
        state.store.as_ref(),
        &state.images,
        NewBook {
            id: book_id,
            title,
            author,
            image,
        },
    )
    .await
    .map_err(error_response)?;

    Ok(Json(AddBookResponse {
        id: book.id,
        title: book.title,
        message: "Book added successfully".to_string(),
    }))
}

fn bad_request(err: axum_extra::extract::multipart::MultipartError) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}

/// Delete a book and its stored cover image
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    ops::delete_book(state.store.as_ref(), &state.images, &id)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Issue request body
#[derive(Debug, Deserialize)]
pub struct IssueBookRequest {
    pub issued_to: String,
}

/// Loan view
#[derive(Debug, Serialize)]
pub struct LoanView {
    pub book_id: String,
    pub title: String,
    pub issued_to: String,
    pub status: BookStatus,
}

impl From<IssuedLoan> for LoanView {
    fn from(loan: IssuedLoan) -> Self {
        Self {
            book_id: loan.book_id,
            title: loan.title,
            issued_to: loan.issued_to,
            status: loan.status,
        }
    }
}

/// Issue a book to a borrower
pub async fn issue_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<IssueBookRequest>,
) -> Result<Json<LoanView>, ApiError> {
    let loan = ops::issue_book(state.store.as_ref(), &id, &req.issued_to)
        .await
        .map_err(error_response)?;

    Ok(Json(loan.into()))
}

/// Return response
#[derive(Debug, Serialize)]
pub struct ReturnBookResponse {
    pub id: String,
    pub message: String,
}

/// Return a previously issued book
pub async fn return_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReturnBookResponse>, ApiError> {
    ops::return_book(state.store.as_ref(), &id)
        .await
        .map_err(error_response)?;

    Ok(Json(ReturnBookResponse {
        id,
        message: "Book returned successfully".to_string(),
    }))
}

/// Loans list response
#[derive(Debug, Serialize)]
pub struct ListLoansResponse {
    pub loans: Vec<LoanView>,
    pub total: usize,
}

/// List the active loans in table order
pub async fn list_loans(
    State(state): State<AppState>,
) -> Result<Json<ListLoansResponse>, ApiError> {
    let loans = ops::list_loans(state.store.as_ref())
        .await
        .map_err(error_response)?;

    let loans: Vec<LoanView> = loans.into_iter().map(Into::into).collect();
    let total = loans.len();
    Ok(Json(ListLoansResponse { loans, total }))
}
