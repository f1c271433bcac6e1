//! REST endpoint paths of the library manager API.
//!
//! Every target handed to a binding is built here, relative to the
//! configured API origin.

pub mod books {
    pub const LIST: &str = "v1/books";
    pub const CREATE: &str = "v1/books";

    pub fn get(id: i64) -> String {
        format!("v1/books/{id}")
    }

    pub fn update(id: i64) -> String {
        format!("v1/books/{id}")
    }

    pub fn delete(id: i64) -> String {
        format!("v1/books/{id}")
    }

    /// Server-side Google Books search by title.
    pub fn search(title: &str) -> String {
        format!("v1/books/search?title={title}")
    }
}

pub mod users {
    pub const LIST: &str = "v1/users";
    pub const CREATE: &str = "v1/users";

    pub fn get(id: i64) -> String {
        format!("v1/users/{id}")
    }

    pub fn update(id: i64) -> String {
        format!("v1/users/{id}")
    }

    pub fn delete(id: i64) -> String {
        format!("v1/users/{id}")
    }
}

pub mod recommendations {
    pub fn for_user(user_id: i64) -> String {
        format!("v1/recommendations/{user_id}")
    }
}

pub mod leases {
    pub const CREATE: &str = "v1/leases";

    pub fn return_book(book_id: i64) -> String {
        format!("v1/leases/{book_id}/return")
    }
}
