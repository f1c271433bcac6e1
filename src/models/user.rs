//! User model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Library member record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identity; [`User::NEW_ID`] until persisted.
    #[serde(default)]
    pub id: i64,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub registration_date: NaiveDate,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
}

impl User {
    /// Sentinel id marking a record as not yet persisted.
    pub const NEW_ID: i64 = 0;

    pub fn is_new(&self) -> bool {
        self.id == Self::NEW_ID
    }
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: Self::NEW_ID,
            name: String::new(),
            email: String::new(),
            registration_date: NaiveDate::default(),
            phone: String::new(),
        }
    }
}
