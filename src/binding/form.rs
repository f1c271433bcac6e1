//! Form-modal binding
//!
//! Couples a form's field state and validation to a save operation and a
//! post-save refresh of the collection the form belongs to.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::lock;
use crate::error::{AppError, AppResult, FieldErrors};
use crate::notify::{Notification, Notifier};

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Persists the entity, returning the server's copy.
pub type SaveFn<T> = Box<dyn Fn(T) -> BoxFuture<AppResult<T>> + Send + Sync>;

/// Refreshes the owning collection after a successful save.
pub type RefreshFn = Box<dyn Fn() -> BoxFuture<()> + Send + Sync>;

/// Produces field-keyed messages for invalid values; empty means valid.
pub type ValidateFn<T> = Box<dyn Fn(&T) -> FieldErrors + Send + Sync>;

pub struct FormModalProps<T> {
    pub initial_values: T,
    pub validate: ValidateFn<T>,
    /// Entity to edit; `None` opens the form in create mode.
    pub entity_to_edit: Option<T>,
    pub save: SaveFn<T>,
    pub refresh: RefreshFn,
    pub notifier: Arc<dyn Notifier>,
}

pub struct FormModalBinding<T> {
    initial: T,
    values: Mutex<T>,
    errors: Mutex<FieldErrors>,
    validate: ValidateFn<T>,
    save: SaveFn<T>,
    refresh: RefreshFn,
    notifier: Arc<dyn Notifier>,
    loading: AtomicBool,
}

impl<T: Clone> FormModalBinding<T> {
    pub fn new(props: FormModalProps<T>) -> Self {
        let values = props
            .entity_to_edit
            .unwrap_or_else(|| props.initial_values.clone());
        Self {
            initial: props.initial_values,
            values: Mutex::new(values),
            errors: Mutex::new(FieldErrors::new()),
            validate: props.validate,
            save: props.save,
            refresh: props.refresh,
            notifier: props.notifier,
            loading: AtomicBool::new(false),
        }
    }

    pub fn values(&self) -> T {
        lock(&self.values).clone()
    }

    pub fn set_values(&self, values: T) {
        *lock(&self.values) = values;
    }

    pub fn errors(&self) -> FieldErrors {
        lock(&self.errors).clone()
    }

    pub fn loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Switch between edit and create mode.
    ///
    /// A concrete entity overwrites every field with its values; `None`
    /// restores the original initial values. Responds to every change,
    /// not only construction.
    pub fn set_entity(&self, entity: Option<T>) {
        match entity {
            Some(entity) => *lock(&self.values) = entity,
            None => self.reset(),
        }
    }

    /// Restore initial values and clear field errors.
    pub fn reset(&self) {
        *lock(&self.values) = self.initial.clone();
        lock(&self.errors).clear();
    }

    /// Validate and persist `values`.
    ///
    /// Local validation failures attach to fields and never notify. A
    /// structured 400 from the save maps onto per-field errors; any other
    /// failure raises an error notification. Only a successful save
    /// resets the form, refreshes the collection, and invokes `on_close`.
    pub async fn handle_save(&self, values: T, on_close: impl FnOnce()) {
        let local = (self.validate)(&values);
        if !local.is_empty() {
            *lock(&self.errors) = local;
            return;
        }

        self.set_values(values.clone());
        self.loading.store(true, Ordering::Release);

        match (self.save)(values).await {
            Ok(_) => {
                self.reset();
                (self.refresh)().await;
                self.loading.store(false, Ordering::Release);
                on_close();
            }
            Err(AppError::Validation(fields)) => {
                *lock(&self.errors) = fields;
                self.loading.store(false, Ordering::Release);
            }
            Err(err) => {
                self.notifier
                    .notify(Notification::error("Error", err.user_message()));
                self.loading.store(false, Ordering::Release);
            }
        }
    }
}
