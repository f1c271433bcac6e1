//! Paginated response envelope

use serde::{Deserialize, Serialize};

/// Page metadata returned alongside every collection page.
///
/// `number` is the zero-based index of the page that was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub total_pages: u32,
    pub total_elements: u64,
    pub size: u32,
    pub number: u32,
}

/// Server-ordered page of records; `content.len() <= page.size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationResponse<T> {
    pub content: Vec<T>,
    pub page: PageMetadata,
}

impl<T> PaginationResponse<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
