//! Users list view controller

use std::sync::Arc;
use std::sync::Mutex;

use serde_json::Value;

use crate::binding::{
    lock, FetchOverride, FormModalBinding, FormModalProps, PaginatedBinding, PaginatedOptions,
    RefreshFn, RequestBinding, SaveFn,
};
use crate::endpoints;
use crate::error::AppResult;
use crate::http::{HttpClient, HttpMethod};
use crate::models::{validate_fields, Book, User};
use crate::notify::{Notification, Notifier};
use crate::views::ConfirmPrompt;

/// Members screen: paginated collection, mutation bindings, and the
/// per-user recommendations action.
pub struct UsersView {
    users: Arc<PaginatedBinding<User>>,
    create: RequestBinding<User>,
    update: RequestBinding<User>,
    delete: RequestBinding<Value>,
    recommendations: RequestBinding<Vec<Book>>,
    /// User whose recommendations fetch is in flight; taken on
    /// completion so a stale result cannot reopen a stale dialog.
    recommended_user: Mutex<Option<User>>,
    confirm: Arc<dyn ConfirmPrompt>,
    notifier: Arc<dyn Notifier>,
}

impl UsersView {
    pub async fn mount(
        http: HttpClient,
        confirm: Arc<dyn ConfirmPrompt>,
        notifier: Arc<dyn Notifier>,
    ) -> Arc<Self> {
        let users = Arc::new(
            PaginatedBinding::mount(
                http.clone(),
                endpoints::users::LIST,
                PaginatedOptions::default(),
            )
            .await,
        );
        Arc::new(Self {
            users,
            create: RequestBinding::new(http.clone(), HttpMethod::Post, ""),
            update: RequestBinding::new(http.clone(), HttpMethod::Put, ""),
            delete: RequestBinding::new(http.clone(), HttpMethod::Delete, ""),
            recommendations: RequestBinding::new(http, HttpMethod::Get, ""),
            recommended_user: Mutex::new(None),
            confirm,
            notifier,
        })
    }

    pub fn users(&self) -> &PaginatedBinding<User> {
        &self.users
    }

    pub fn saving(&self) -> bool {
        self.create.loading() || self.update.loading()
    }

    pub fn deleting(&self) -> bool {
        self.delete.loading()
    }

    pub fn recommending(&self) -> bool {
        self.recommendations.loading()
    }

    /// Persist a user, routed by the id sentinel: 0 creates, anything
    /// else updates in place.
    pub async fn save_user(&self, user: User) -> AppResult<User> {
        let body = serde_json::to_value(&user)?;
        if user.is_new() {
            self.create
                .refetch_with(FetchOverride::with_body(endpoints::users::CREATE, body))
                .await
        } else {
            self.update
                .refetch_with(FetchOverride::with_body(
                    endpoints::users::update(user.id),
                    body,
                ))
                .await
        }
    }

    /// Delete after explicit confirmation; a declined prompt fires no
    /// request. Returns whether the delete actually ran.
    pub async fn delete_user(&self, user_id: i64) -> AppResult<bool> {
        let confirmed = self
            .confirm
            .confirm(
                "Confirm deletion",
                "Are you sure you want to delete this user?",
            )
            .await;
        if !confirmed {
            return Ok(false);
        }

        self.delete
            .refetch_with(FetchOverride::with_body(
                endpoints::users::delete(user_id),
                Value::Null,
            ))
            .await?;
        let _ = self.users.refetch().await;
        Ok(true)
    }

    /// Fetch recommendations for one user.
    ///
    /// Empty results raise a "no recommendations" notice instead of
    /// returning books; failures notify with the user's name. Either
    /// way the tracked user is cleared before returning.
    pub async fn generate_recommendations(&self, user: &User) -> AppResult<Option<Vec<Book>>> {
        *lock(&self.recommended_user) = Some(user.clone());

        let result = self
            .recommendations
            .refetch_with(FetchOverride::target(endpoints::recommendations::for_user(
                user.id,
            )))
            .await;
        let triggered = lock(&self.recommended_user).take();
        let name = triggered.map(|user| user.name).unwrap_or_default();

        match result {
            Err(err) => {
                self.notifier.notify(Notification::error(
                    "Failed to fetch recommendations",
                    format!("Could not fetch recommendations for {name}"),
                ));
                Err(err)
            }
            Ok(books) if books.is_empty() => {
                self.notifier.notify(Notification::warning(
                    "No recommendations found",
                    format!("There are no recommended books for {name}"),
                ));
                Ok(None)
            }
            Ok(books) => Ok(Some(books)),
        }
    }

    /// Form-modal binding for the create/edit dialog, wired to
    /// [`UsersView::save_user`] and a post-save list refresh.
    pub fn form(self: &Arc<Self>, user_to_edit: Option<User>) -> FormModalBinding<User> {
        let view = Arc::clone(self);
        let save: SaveFn<User> = Box::new(move |user| {
            let view = Arc::clone(&view);
            Box::pin(async move { view.save_user(user).await })
        });

        let users = Arc::clone(&self.users);
        let refresh: RefreshFn = Box::new(move || {
            let users = Arc::clone(&users);
            Box::pin(async move {
                let _ = users.refetch().await;
            })
        });

        FormModalBinding::new(FormModalProps {
            initial_values: User::default(),
            validate: Box::new(validate_fields::<User>),
            entity_to_edit: user_to_edit,
            save,
            refresh,
            notifier: Arc::clone(&self.notifier),
        })
    }
}
