//! Libretto - Library Catalog Admin Client
//!
//! Demo binary: boots configuration and tracing, then lists the first
//! page of books and users from the configured API origin.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libretto::{
    config::AppConfig,
    http::HttpClient,
    notify::TracingNotifier,
    views::{AutoConfirm, BooksView, UsersView},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("libretto={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Libretto v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("API origin: {}", config.api.base_url);

    let http = HttpClient::from_config(&config.api);
    let confirm = Arc::new(AutoConfirm);
    let notifier = Arc::new(TracingNotifier);

    let books = BooksView::mount(http.clone(), confirm.clone(), notifier.clone()).await;
    match books.books().data() {
        Some(page) => tracing::info!(
            "Books: {} of {} on page {}/{}",
            page.content.len(),
            page.page.total_elements,
            books.books().current_page(),
            page.page.total_pages,
        ),
        None => {
            if let Some(err) = books.books().error() {
                tracing::error!("Failed to load books: {}", err.user_message());
            }
        }
    }

    let users = UsersView::mount(http, confirm, notifier).await;
    match users.users().data() {
        Some(page) => tracing::info!(
            "Users: {} of {} on page {}/{}",
            page.content.len(),
            page.page.total_elements,
            users.users().current_page(),
            page.page.total_pages,
        ),
        None => {
            if let Some(err) = users.users().error() {
                tracing::error!("Failed to load users: {}", err.user_message());
            }
        }
    }

    Ok(())
}
