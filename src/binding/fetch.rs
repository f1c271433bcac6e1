//! Single-request data binding

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::lock;
use crate::error::{AppError, AppResult};
use crate::http::{HttpClient, HttpMethod};

/// Observable outcome of the most recent request.
#[derive(Debug, Clone)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<AppError>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

/// Explicit overrides for a refetch.
///
/// A supplied target or body permanently replaces the binding's
/// remembered value; later calls without overrides replay it.
#[derive(Debug, Clone, Default)]
pub struct FetchOverride {
    pub target: Option<String>,
    pub body: Option<Value>,
}

impl FetchOverride {
    pub fn target(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            body: None,
        }
    }

    pub fn with_body(target: impl Into<String>, body: Value) -> Self {
        Self {
            target: Some(target.into()),
            body: Some(body),
        }
    }
}

/// Binding of one HTTP call to `{data, loading, error}` state.
///
/// Overlapping refetches race and the last completion wins; there is no
/// cancellation, de-duplication, or sequencing token.
pub struct RequestBinding<T> {
    http: HttpClient,
    method: HttpMethod,
    target: Mutex<String>,
    body: Mutex<Option<Value>>,
    state: Mutex<FetchState<T>>,
}

impl<T: DeserializeOwned + Clone> RequestBinding<T> {
    pub fn new(http: HttpClient, method: HttpMethod, initial_target: impl Into<String>) -> Self {
        Self {
            http,
            method,
            target: Mutex::new(initial_target.into()),
            body: Mutex::new(None),
            state: Mutex::new(FetchState::default()),
        }
    }

    /// Construct and, when `execute_on_mount` is set, fire exactly one
    /// request with the initial target.
    pub async fn mount(
        http: HttpClient,
        method: HttpMethod,
        initial_target: impl Into<String>,
        execute_on_mount: bool,
    ) -> Self {
        let binding = Self::new(http, method, initial_target);
        if execute_on_mount {
            let _ = binding.refetch().await;
        }
        binding
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState<T> {
        lock(&self.state).clone()
    }

    pub fn data(&self) -> Option<T> {
        lock(&self.state).data.clone()
    }

    pub fn loading(&self) -> bool {
        lock(&self.state).loading
    }

    pub fn error(&self) -> Option<AppError> {
        lock(&self.state).error.clone()
    }

    /// Target the next request will hit.
    pub fn current_target(&self) -> String {
        lock(&self.target).clone()
    }

    /// Replay the request against the remembered target and body.
    pub async fn refetch(&self) -> AppResult<T> {
        self.refetch_with(FetchOverride::default()).await
    }

    /// Apply overrides, then issue one request.
    ///
    /// `loading` is raised and `error` cleared before the call; success
    /// publishes `data`, failure publishes `error` and clears `data`.
    pub async fn refetch_with(&self, overrides: FetchOverride) -> AppResult<T> {
        if let Some(target) = overrides.target {
            *lock(&self.target) = target;
        }
        if let Some(body) = overrides.body {
            *lock(&self.body) = Some(body);
        }

        let target = lock(&self.target).clone();
        let body = lock(&self.body).clone();

        {
            let mut state = lock(&self.state);
            state.loading = true;
            state.error = None;
        }

        match self.http.request::<T>(self.method, &target, body.as_ref()).await {
            Ok(data) => {
                *lock(&self.state) = FetchState {
                    data: Some(data.clone()),
                    loading: false,
                    error: None,
                };
                Ok(data)
            }
            Err(err) => {
                *lock(&self.state) = FetchState {
                    data: None,
                    loading: false,
                    error: Some(err.clone()),
                };
                Err(err)
            }
        }
    }
}
