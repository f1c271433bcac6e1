//! View controllers
//!
//! Each controller wires one paginated collection binding to the request
//! bindings for its mutations, the way the admin screens compose them.
//! Interactive concerns (confirmation dialogs, toasts) are trait seams.

pub mod books;
pub mod leases;
pub mod users;

pub use books::BooksView;
pub use leases::LeasesView;
pub use users::UsersView;

use async_trait::async_trait;

/// Confirmation step gating destructive actions; a declined prompt
/// means the action never fires.
#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    async fn confirm(&self, title: &str, message: &str) -> bool;
}

/// Prompt that approves everything, for non-interactive use.
pub struct AutoConfirm;

#[async_trait]
impl ConfirmPrompt for AutoConfirm {
    async fn confirm(&self, _title: &str, _message: &str) -> bool {
        true
    }
}
