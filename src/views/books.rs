//! Books list view controller

use std::sync::Arc;

use serde_json::Value;

use crate::binding::{
    FetchOverride, FormModalBinding, FormModalProps, PaginatedBinding, PaginatedOptions,
    RefreshFn, RequestBinding, SaveFn,
};
use crate::endpoints;
use crate::error::AppResult;
use crate::http::{HttpClient, HttpMethod};
use crate::models::{validate_fields, Book};
use crate::notify::{Notification, Notifier};
use crate::views::ConfirmPrompt;

/// Book catalog screen: one paginated collection plus request bindings
/// for create, update, delete, and remote search.
pub struct BooksView {
    books: Arc<PaginatedBinding<Book>>,
    create: RequestBinding<Book>,
    update: RequestBinding<Book>,
    delete: RequestBinding<Value>,
    search: RequestBinding<Vec<Book>>,
    confirm: Arc<dyn ConfirmPrompt>,
    notifier: Arc<dyn Notifier>,
}

impl BooksView {
    pub async fn mount(
        http: HttpClient,
        confirm: Arc<dyn ConfirmPrompt>,
        notifier: Arc<dyn Notifier>,
    ) -> Arc<Self> {
        let books = Arc::new(
            PaginatedBinding::mount(
                http.clone(),
                endpoints::books::LIST,
                PaginatedOptions::default(),
            )
            .await,
        );
        Arc::new(Self {
            books,
            create: RequestBinding::new(http.clone(), HttpMethod::Post, ""),
            update: RequestBinding::new(http.clone(), HttpMethod::Put, ""),
            delete: RequestBinding::new(http.clone(), HttpMethod::Delete, ""),
            search: RequestBinding::new(http, HttpMethod::Get, ""),
            confirm,
            notifier,
        })
    }

    /// Collection binding backing the table and pagination controls.
    pub fn books(&self) -> &PaginatedBinding<Book> {
        &self.books
    }

    pub fn saving(&self) -> bool {
        self.create.loading() || self.update.loading()
    }

    pub fn deleting(&self) -> bool {
        self.delete.loading()
    }

    pub fn searching(&self) -> bool {
        self.search.loading()
    }

    /// Persist a book, routed by the id sentinel: 0 creates, anything
    /// else updates in place.
    pub async fn save_book(&self, book: Book) -> AppResult<Book> {
        let body = serde_json::to_value(&book)?;
        if book.is_new() {
            self.create
                .refetch_with(FetchOverride::with_body(endpoints::books::CREATE, body))
                .await
        } else {
            self.update
                .refetch_with(FetchOverride::with_body(
                    endpoints::books::update(book.id),
                    body,
                ))
                .await
        }
    }

    /// Delete after explicit confirmation; a declined prompt fires no
    /// request. Returns whether the delete actually ran.
    pub async fn delete_book(&self, book_id: i64) -> AppResult<bool> {
        let confirmed = self
            .confirm
            .confirm(
                "Confirm deletion",
                "Are you sure you want to delete this book?",
            )
            .await;
        if !confirmed {
            return Ok(false);
        }

        self.delete
            .refetch_with(FetchOverride::with_body(
                endpoints::books::delete(book_id),
                Value::Null,
            ))
            .await?;
        let _ = self.books.refetch().await;
        Ok(true)
    }

    /// Search the remote catalog by title. A blank term notifies and
    /// fires nothing.
    pub async fn search_books(&self, term: &str) -> AppResult<Option<Vec<Book>>> {
        if term.trim().is_empty() {
            self.notifier.notify(Notification::error(
                "Error",
                "Enter the title of the book to search for",
            ));
            return Ok(None);
        }
        let books = self
            .search
            .refetch_with(FetchOverride::target(endpoints::books::search(term)))
            .await?;
        Ok(Some(books))
    }

    /// Add a search result to the catalog and resynchronize the list.
    pub async fn import_book(&self, book: Book) -> AppResult<Book> {
        let body = serde_json::to_value(&book)?;
        let created = self
            .create
            .refetch_with(FetchOverride::with_body(endpoints::books::CREATE, body))
            .await?;
        let _ = self.books.refetch().await;
        self.notifier.notify(Notification::success(
            "Success",
            "Book added successfully",
        ));
        Ok(created)
    }

    /// Form-modal binding for the create/edit dialog, wired to
    /// [`BooksView::save_book`] and a post-save list refresh.
    pub fn form(self: &Arc<Self>, book_to_edit: Option<Book>) -> FormModalBinding<Book> {
        let view = Arc::clone(self);
        let save: SaveFn<Book> = Box::new(move |book| {
            let view = Arc::clone(&view);
            Box::pin(async move { view.save_book(book).await })
        });

        let books = Arc::clone(&self.books);
        let refresh: RefreshFn = Box::new(move || {
            let books = Arc::clone(&books);
            Box::pin(async move {
                let _ = books.refetch().await;
            })
        });

        FormModalBinding::new(FormModalProps {
            initial_values: Book::default(),
            validate: Box::new(validate_fields::<Book>),
            entity_to_edit: book_to_edit,
            save,
            refresh,
            notifier: Arc::clone(&self.notifier),
        })
    }
}
