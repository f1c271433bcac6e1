//! Lease model and related types

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::book::Book;
use super::user::User;

/// Lease status (string identifier, values defined server-side)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeaseStatus {
    Active,
    Returned,
    /// Status slug this client does not know about.
    Other(String),
}

impl LeaseStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LeaseStatus::Active => "ACTIVE",
            LeaseStatus::Returned => "RETURNED",
            LeaseStatus::Other(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for LeaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for LeaseStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ACTIVE" => LeaseStatus::Active,
            "RETURNED" => LeaseStatus::Returned,
            _ => LeaseStatus::Other(s),
        }
    }
}

impl From<&str> for LeaseStatus {
    fn from(s: &str) -> Self {
        LeaseStatus::from(s.to_string())
    }
}

impl From<LeaseStatus> for String {
    fn from(status: LeaseStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Lease record.
///
/// `user` and `book` are denormalized read conveniences; they may go
/// stale independently of the referenced records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lease {
    pub id: i64,
    pub user_id: i64,
    pub user: User,
    pub book_id: i64,
    pub book: Book,
    pub lease_date: NaiveDate,
    pub return_date: NaiveDate,
    pub status: LeaseStatus,
}

/// Create lease request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLease {
    #[validate(required(message = "User id is required"))]
    pub user_id: Option<i64>,
    #[validate(required(message = "Book id is required"))]
    pub book_id: Option<i64>,
    pub lease_date: NaiveDate,
    #[validate(required(message = "Return date is required"))]
    pub return_date: Option<NaiveDate>,
}

impl Default for CreateLease {
    fn default() -> Self {
        Self {
            user_id: None,
            book_id: None,
            lease_date: Utc::now().date_naive(),
            return_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validate_fields;

    #[test]
    fn test_status_round_trip() {
        assert_eq!(LeaseStatus::from("ACTIVE"), LeaseStatus::Active);
        assert_eq!(LeaseStatus::Returned.as_str(), "RETURNED");
        assert_eq!(
            LeaseStatus::from("OVERDUE"),
            LeaseStatus::Other("OVERDUE".to_string())
        );
    }

    #[test]
    fn test_create_lease_requires_ids_and_return_date() {
        let errors = validate_fields(&CreateLease::default());
        assert!(errors.contains_key("user_id"));
        assert!(errors.contains_key("book_id"));
        assert_eq!(
            errors.get("return_date").map(String::as_str),
            Some("Return date is required")
        );
    }
}
