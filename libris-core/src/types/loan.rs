//! The IssuedLoan row type and the IssuedLoans table

use super::book::{Book, BookStatus};
use serde::{Deserialize, Serialize};

/// One row of the IssuedLoans table
///
/// The title is copied from the book at issue time, so the row stays
/// readable even if the book is later deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuedLoan {
    #[serde(rename = "BookID")]
    pub book_id: String,

    /// Title as it was when the loan was created
    #[serde(rename = "Title")]
    pub title: String,

    /// Borrower name
    #[serde(rename = "IssuedTo")]
    pub issued_to: String,

    /// Always `Issued` while the row exists
    #[serde(rename = "Status")]
    pub status: BookStatus,
}

impl IssuedLoan {
    /// Canonical column order of the IssuedLoans table
    pub const COLUMNS: [&'static str; 4] = ["BookID", "Title", "IssuedTo", "Status"];

    /// Create a loan for the given book
    pub fn new(book: &Book, issued_to: impl Into<String>) -> Self {
        Self {
            book_id: book.id.clone(),
            title: book.title.clone(),
            issued_to: issued_to.into(),
            status: BookStatus::Issued,
        }
    }
}

/// The IssuedLoans table, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoanTable(Vec<IssuedLoan>);

impl LoanTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the first loan for the given book ID
    pub fn find_by_book(&self, book_id: &str) -> Option<&IssuedLoan> {
        self.0.iter().find(|l| l.book_id == book_id)
    }

    /// Append a row at the end of the table
    pub fn insert(&mut self, loan: IssuedLoan) {
        self.0.push(loan);
    }

    /// Remove every loan for the given book ID, returning how many were dropped
    pub fn remove_by_book(&mut self, book_id: &str) -> usize {
        let before = self.0.len();
        self.0.retain(|l| l.book_id != book_id);
        before - self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IssuedLoan> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<IssuedLoan> for LoanTable {
    fn from_iter<I: IntoIterator<Item = IssuedLoan>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for LoanTable {
    type Item = IssuedLoan;
    type IntoIter = std::vec::IntoIter<IssuedLoan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_copies_title() {
        let book = Book::new("B1", "Dune", "Frank Herbert");
        let loan = IssuedLoan::new(&book, "Alice");

        assert_eq!(loan.book_id, "B1");
        assert_eq!(loan.title, "Dune");
        assert_eq!(loan.issued_to, "Alice");
        assert_eq!(loan.status, BookStatus::Issued);
    }

    #[test]
    fn test_remove_by_book_drops_all_matches() {
        let book = Book::new("B1", "Dune", "Frank Herbert");
        let mut table = LoanTable::new();
        table.insert(IssuedLoan::new(&book, "Alice"));
        table.insert(IssuedLoan::new(&book, "Bob"));

        assert_eq!(table.remove_by_book("B1"), 2);
        assert!(table.is_empty());
        assert_eq!(table.remove_by_book("B1"), 0);
    }
}
