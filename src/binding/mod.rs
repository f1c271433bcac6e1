//! Data-binding primitives
//!
//! Three composable primitives give every consumer its loading/error/data
//! lifecycle:
//!
//! - [`RequestBinding`] wraps a single HTTP call behind observable
//!   `{data, loading, error}` state and a refetch operation;
//! - [`PaginatedBinding`] owns page size and current page, derives the
//!   request target from them, and refires an internal GET binding when
//!   they change;
//! - [`FormModalBinding`] couples form field state and validation to a
//!   save operation and a post-save collection refresh.

pub mod fetch;
pub mod form;
pub mod paginated;

pub use fetch::{FetchOverride, FetchState, RequestBinding};
pub use form::{FormModalBinding, FormModalProps, RefreshFn, SaveFn, ValidateFn};
pub use paginated::{PaginatedBinding, PaginatedOptions, UrlTransform, DEFAULT_PAGE_SIZE};

use std::sync::{Mutex, MutexGuard};

/// Lock that survives poisoning; binding state stays usable after a
/// panicked writer.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
