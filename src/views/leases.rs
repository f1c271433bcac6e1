//! Lease view controller

use std::sync::Arc;

use crate::binding::{
    FetchOverride, FormModalBinding, FormModalProps, RefreshFn, RequestBinding, SaveFn,
};
use crate::endpoints;
use crate::error::AppResult;
use crate::http::{HttpClient, HttpMethod};
use crate::models::{validate_fields, CreateLease, Lease};
use crate::notify::{Notification, Notifier};

/// Lease and return actions; the server owns all lease state, this
/// controller only issues the two transaction endpoints.
pub struct LeasesView {
    create: RequestBinding<Lease>,
    return_book: RequestBinding<Lease>,
    notifier: Arc<dyn Notifier>,
}

impl LeasesView {
    pub fn new(http: HttpClient, notifier: Arc<dyn Notifier>) -> Arc<Self> {
        Arc::new(Self {
            create: RequestBinding::new(http.clone(), HttpMethod::Post, ""),
            return_book: RequestBinding::new(http, HttpMethod::Post, ""),
            notifier,
        })
    }

    pub fn leasing(&self) -> bool {
        self.create.loading()
    }

    pub fn returning(&self) -> bool {
        self.return_book.loading()
    }

    /// Lease a book to a user.
    pub async fn lease_book(&self, lease: CreateLease) -> AppResult<Lease> {
        let body = serde_json::to_value(&lease)?;
        let created = self
            .create
            .refetch_with(FetchOverride::with_body(endpoints::leases::CREATE, body))
            .await?;
        self.notifier.notify(Notification::success(
            "Success",
            "Book leased successfully",
        ));
        Ok(created)
    }

    /// Mark the active lease of a book as returned.
    pub async fn return_book(&self, book_id: i64) -> AppResult<Lease> {
        let returned = self
            .return_book
            .refetch_with(FetchOverride::target(endpoints::leases::return_book(
                book_id,
            )))
            .await?;
        self.notifier.notify(Notification::success(
            "Success",
            "Book returned successfully",
        ));
        Ok(returned)
    }

    /// Form-modal binding for the lease dialog. The lease date defaults
    /// to today; there is no lease collection to refresh afterwards.
    pub fn lease_form(self: &Arc<Self>) -> FormModalBinding<CreateLease> {
        let view = Arc::clone(self);
        let save: SaveFn<CreateLease> = Box::new(move |lease| {
            let view = Arc::clone(&view);
            Box::pin(async move {
                view.lease_book(lease.clone()).await?;
                Ok(lease)
            })
        });

        let refresh: RefreshFn = Box::new(|| Box::pin(async {}));

        FormModalBinding::new(FormModalProps {
            initial_values: CreateLease::default(),
            validate: Box::new(validate_fields::<CreateLease>),
            entity_to_edit: None,
            save,
            refresh,
            notifier: Arc::clone(&self.notifier),
        })
    }
}
