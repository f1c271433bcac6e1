//! In-process stub of the library manager API for integration tests.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use libretto::models::{Book, CreateLease, Lease, LeaseStatus, PageMetadata, PaginationResponse, User};
use libretto::notify::{Notification, Notifier};
use libretto::views::ConfirmPrompt;

#[derive(Clone, Default)]
pub struct StubApi {
    pub books: Arc<Mutex<Vec<Book>>>,
    pub users: Arc<Mutex<Vec<User>>>,
    pub remote_books: Arc<Mutex<Vec<Book>>>,
    pub recommendations: Arc<Mutex<Vec<Book>>>,
    pub next_id: Arc<AtomicI64>,
    pub book_list_hits: Arc<AtomicUsize>,
    pub user_list_hits: Arc<AtomicUsize>,
    pub create_hits: Arc<AtomicUsize>,
    pub update_hits: Arc<AtomicUsize>,
    pub delete_hits: Arc<AtomicUsize>,
    pub lease_hits: Arc<AtomicUsize>,
}

impl StubApi {
    pub fn new() -> Self {
        let api = StubApi::default();
        api.next_id.store(1, Ordering::SeqCst);
        api
    }

    pub fn seed_books(&self, count: usize) {
        let mut books = self.books.lock().unwrap();
        for _ in 0..count {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            books.push(sample_book(id));
        }
    }

    pub fn seed_users(&self, count: usize) {
        let mut users = self.users.lock().unwrap();
        for _ in 0..count {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            users.push(sample_user(id));
        }
    }

    /// Bind to an ephemeral port and return the base URL.
    pub async fn spawn(&self) -> String {
        let app = router(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind stub listener");
        let addr = listener.local_addr().expect("no local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server failed");
        });
        format!("http://{addr}")
    }
}

pub fn sample_book(id: i64) -> Book {
    Book {
        id,
        title: format!("Book {id}"),
        author: "Author".to_string(),
        isbn: format!("978-0-00-00000{id}-0"),
        publication_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        category: "Fiction".to_string(),
    }
}

pub fn sample_user(id: i64) -> User {
    User {
        id,
        name: format!("User {id}"),
        email: format!("user{id}@example.org"),
        registration_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        phone: "555-0100".to_string(),
    }
}

#[derive(Deserialize)]
struct PageQuery {
    page: u32,
    size: u32,
}

fn paginate<T: Clone>(all: &[T], query: &PageQuery) -> PaginationResponse<T> {
    let size = query.size.max(1) as usize;
    let start = query.page as usize * size;
    let content: Vec<T> = all.iter().skip(start).take(size).cloned().collect();
    let total = all.len() as u64;
    PaginationResponse {
        content,
        page: PageMetadata {
            total_pages: ((total + size as u64 - 1) / size as u64) as u32,
            total_elements: total,
            size: query.size,
            number: query.page,
        },
    }
}

type ApiError = (StatusCode, Json<Value>);

fn router(api: StubApi) -> Router {
    Router::new()
        .route("/v1/books", get(list_books).post(create_book))
        .route("/v1/books/search", get(search_books))
        .route("/v1/books/:id", axum::routing::put(update_book).delete(delete_book))
        .route("/v1/users", get(list_users).post(create_user))
        .route("/v1/users/:id", axum::routing::put(update_user).delete(delete_user))
        .route("/v1/recommendations/:user_id", get(recommendations))
        .route("/v1/leases", post(create_lease))
        .route("/v1/leases/:book_id/return", post(return_lease))
        .with_state(api)
}

async fn list_books(
    State(api): State<StubApi>,
    Query(query): Query<PageQuery>,
) -> Json<PaginationResponse<Book>> {
    api.book_list_hits.fetch_add(1, Ordering::SeqCst);
    Json(paginate(&api.books.lock().unwrap(), &query))
}

async fn create_book(
    State(api): State<StubApi>,
    Json(mut book): Json<Book>,
) -> Result<Json<Book>, ApiError> {
    api.create_hits.fetch_add(1, Ordering::SeqCst);
    if book.isbn == "dup" {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"isbn": "ISBN already registered"})),
        ));
    }
    book.id = api.next_id.fetch_add(1, Ordering::SeqCst);
    api.books.lock().unwrap().push(book.clone());
    Ok(Json(book))
}

async fn update_book(
    State(api): State<StubApi>,
    Path(id): Path<i64>,
    Json(book): Json<Book>,
) -> Result<Json<Book>, ApiError> {
    api.update_hits.fetch_add(1, Ordering::SeqCst);
    let mut books = api.books.lock().unwrap();
    match books.iter_mut().find(|candidate| candidate.id == id) {
        Some(existing) => {
            *existing = Book { id, ..book };
            Ok(Json(existing.clone()))
        }
        None => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"message": format!("Book {id} not found")})),
        )),
    }
}

async fn delete_book(State(api): State<StubApi>, Path(id): Path<i64>) -> Json<bool> {
    api.delete_hits.fetch_add(1, Ordering::SeqCst);
    let mut books = api.books.lock().unwrap();
    let before = books.len();
    books.retain(|book| book.id != id);
    Json(books.len() < before)
}

async fn search_books(
    State(api): State<StubApi>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Book>> {
    let books = api.remote_books.lock().unwrap();
    let matches: Vec<Book> = books
        .iter()
        .filter(|book| book.title.to_lowercase().contains(&query.title.to_lowercase()))
        .cloned()
        .collect();
    Json(matches)
}

#[derive(Deserialize)]
struct SearchQuery {
    title: String,
}

async fn list_users(
    State(api): State<StubApi>,
    Query(query): Query<PageQuery>,
) -> Json<PaginationResponse<User>> {
    api.user_list_hits.fetch_add(1, Ordering::SeqCst);
    Json(paginate(&api.users.lock().unwrap(), &query))
}

async fn create_user(
    State(api): State<StubApi>,
    Json(mut user): Json<User>,
) -> Json<User> {
    api.create_hits.fetch_add(1, Ordering::SeqCst);
    user.id = api.next_id.fetch_add(1, Ordering::SeqCst);
    api.users.lock().unwrap().push(user.clone());
    Json(user)
}

async fn update_user(
    State(api): State<StubApi>,
    Path(id): Path<i64>,
    Json(user): Json<User>,
) -> Result<Json<User>, ApiError> {
    api.update_hits.fetch_add(1, Ordering::SeqCst);
    let mut users = api.users.lock().unwrap();
    match users.iter_mut().find(|candidate| candidate.id == id) {
        Some(existing) => {
            *existing = User { id, ..user };
            Ok(Json(existing.clone()))
        }
        None => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"message": format!("User {id} not found")})),
        )),
    }
}

async fn delete_user(State(api): State<StubApi>, Path(id): Path<i64>) -> Json<bool> {
    api.delete_hits.fetch_add(1, Ordering::SeqCst);
    let mut users = api.users.lock().unwrap();
    let before = users.len();
    users.retain(|user| user.id != id);
    Json(users.len() < before)
}

async fn recommendations(
    State(api): State<StubApi>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Book>>, ApiError> {
    if user_id == 999 {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "recommendation engine offline"})),
        ));
    }
    Ok(Json(api.recommendations.lock().unwrap().clone()))
}

async fn create_lease(
    State(api): State<StubApi>,
    Json(lease): Json<CreateLease>,
) -> Result<Json<Lease>, ApiError> {
    api.lease_hits.fetch_add(1, Ordering::SeqCst);
    let (Some(user_id), Some(book_id), Some(return_date)) =
        (lease.user_id, lease.book_id, lease.return_date)
    else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"returnDate": "required"})),
        ));
    };
    Ok(Json(Lease {
        id: api.next_id.fetch_add(1, Ordering::SeqCst),
        user_id,
        user: sample_user(user_id),
        book_id,
        book: sample_book(book_id),
        lease_date: lease.lease_date,
        return_date,
        status: LeaseStatus::Active,
    }))
}

async fn return_lease(
    State(api): State<StubApi>,
    Path(book_id): Path<i64>,
) -> Json<Lease> {
    api.lease_hits.fetch_add(1, Ordering::SeqCst);
    Json(Lease {
        id: 1,
        user_id: 1,
        user: sample_user(1),
        book_id,
        book: sample_book(book_id),
        lease_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        return_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        status: LeaseStatus::Returned,
    })
}

/// Notifier double that records everything it is shown.
#[derive(Default)]
pub struct RecordingNotifier {
    pub shown: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<Notification> {
        self.shown.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.shown.lock().unwrap().push(notification);
    }
}

/// Prompt double with a fixed answer; counts how often it is asked.
pub struct StaticConfirm {
    pub answer: bool,
    pub asked: AtomicUsize,
}

impl StaticConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ConfirmPrompt for StaticConfirm {
    async fn confirm(&self, _title: &str, _message: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}
