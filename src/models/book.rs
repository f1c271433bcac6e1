//! Book model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Catalog book record.
///
/// Wire format is camelCase to match the server contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Server-assigned identity; [`Book::NEW_ID`] until persisted.
    #[serde(default)]
    pub id: i64,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "ISBN is required"))]
    pub isbn: String,
    pub publication_date: NaiveDate,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
}

impl Book {
    /// Sentinel id marking a record as not yet persisted.
    pub const NEW_ID: i64 = 0;

    pub fn is_new(&self) -> bool {
        self.id == Self::NEW_ID
    }
}

impl Default for Book {
    fn default() -> Self {
        Self {
            id: Self::NEW_ID,
            title: String::new(),
            author: String::new(),
            isbn: String::new(),
            publication_date: NaiveDate::default(),
            category: String::new(),
        }
    }
}
