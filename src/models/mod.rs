//! Data models for the library manager API

pub mod book;
pub mod lease;
pub mod pagination;
pub mod user;

// Re-export commonly used types
pub use book::Book;
pub use lease::{CreateLease, Lease, LeaseStatus};
pub use pagination::{PageMetadata, PaginationResponse};
pub use user::User;

use crate::error::FieldErrors;

/// Flatten validator derive output into the field-keyed error map
/// shared with the HTTP 400 contract. Keeps the first message per field.
pub fn validation_errors(errors: &validator::ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        if let Some(error) = field_errors.first() {
            let message = error
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| error.code.to_string());
            fields.insert(field.to_string(), message);
        }
    }
    fields
}

/// Validate a payload, producing the field-keyed error map on failure.
pub fn validate_fields<T: validator::Validate>(payload: &T) -> FieldErrors {
    match payload.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => validation_errors(&errors),
    }
}
