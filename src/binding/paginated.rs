//! Paginated collection binding

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use super::fetch::{FetchOverride, FetchState, RequestBinding};
use super::lock;
use crate::error::{AppError, AppResult};
use crate::http::{HttpClient, HttpMethod};
use crate::models::PaginationResponse;

pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// Rewrites the derived target before it is handed to the request
/// binding, e.g. to append extra query parameters.
pub type UrlTransform = Box<dyn Fn(String) -> String + Send + Sync>;

pub struct PaginatedOptions {
    pub execute_on_mount: bool,
    pub page_size: u32,
    pub current_page: u32,
    pub transform: Option<UrlTransform>,
}

impl Default for PaginatedOptions {
    fn default() -> Self {
        Self {
            execute_on_mount: true,
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
            transform: None,
        }
    }
}

struct PageState {
    page_size: u32,
    current_page: u32,
    current_url: String,
}

/// GET binding over a paginated collection endpoint.
///
/// `current_page` is one-based; the wire `page` query parameter is
/// always zero-based. Setters rederive the target and refire the
/// underlying GET; mounting fires at most one request, never two.
pub struct PaginatedBinding<T> {
    base_target: String,
    transform: Option<UrlTransform>,
    page: Mutex<PageState>,
    request: RequestBinding<PaginationResponse<T>>,
}

impl<T: DeserializeOwned + Clone> PaginatedBinding<T> {
    pub async fn mount(
        http: HttpClient,
        base_target: impl Into<String>,
        options: PaginatedOptions,
    ) -> Self {
        let base_target = base_target.into();
        let current_url = derive_url(
            &base_target,
            options.transform.as_ref(),
            options.current_page,
            options.page_size,
        );
        let request = RequestBinding::new(http, HttpMethod::Get, current_url.clone());
        let binding = Self {
            base_target,
            transform: options.transform,
            page: Mutex::new(PageState {
                page_size: options.page_size,
                current_page: options.current_page,
                current_url,
            }),
            request,
        };
        if options.execute_on_mount {
            let _ = binding.request.refetch().await;
        }
        binding
    }

    pub fn page_size(&self) -> u32 {
        lock(&self.page).page_size
    }

    pub fn current_page(&self) -> u32 {
        lock(&self.page).current_page
    }

    pub fn current_url(&self) -> String {
        lock(&self.page).current_url.clone()
    }

    pub fn state(&self) -> FetchState<PaginationResponse<T>> {
        self.request.state()
    }

    pub fn data(&self) -> Option<PaginationResponse<T>> {
        self.request.data()
    }

    pub fn loading(&self) -> bool {
        self.request.loading()
    }

    pub fn error(&self) -> Option<AppError> {
        self.request.error()
    }

    /// Move to another one-based page and refire the GET.
    ///
    /// No bounds validation against `total_pages`; the caller clamps.
    pub async fn set_current_page(&self, page: u32) -> AppResult<PaginationResponse<T>> {
        let url = {
            let mut state = lock(&self.page);
            state.current_page = page;
            state.current_url = derive_url(
                &self.base_target,
                self.transform.as_ref(),
                state.current_page,
                state.page_size,
            );
            state.current_url.clone()
        };
        self.request.refetch_with(FetchOverride::target(url)).await
    }

    /// Change the page size and refire the GET.
    pub async fn set_page_size(&self, size: u32) -> AppResult<PaginationResponse<T>> {
        let url = {
            let mut state = lock(&self.page);
            state.page_size = size;
            state.current_url = derive_url(
                &self.base_target,
                self.transform.as_ref(),
                state.current_page,
                state.page_size,
            );
            state.current_url.clone()
        };
        self.request.refetch_with(FetchOverride::target(url)).await
    }

    /// Manual refresh against the current target; page and size are
    /// left untouched.
    pub async fn refetch(&self) -> AppResult<PaginationResponse<T>> {
        self.request.refetch().await
    }
}

fn derive_url(
    base: &str,
    transform: Option<&UrlTransform>,
    current_page: u32,
    page_size: u32,
) -> String {
    let url = format!(
        "{}?page={}&size={}",
        base,
        current_page.saturating_sub(1),
        page_size
    );
    match transform {
        Some(transform) => transform(url),
        None => url,
    }
}
