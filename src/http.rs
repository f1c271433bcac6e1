//! HTTP transport for the Libretto client

use std::sync::Arc;

use reqwest::{header::CONTENT_TYPE, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult, FieldErrors};

/// HTTP methods supported by the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl HttpMethod {
    /// Methods that carry a JSON request body.
    fn sends_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

/// Thin JSON client over the configured API origin.
///
/// Cheap to clone; every binding holds its own handle. No retry,
/// no timeout policy beyond reqwest defaults.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Arc<str>,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, target: &str) -> String {
        format!("{}/{}", self.base_url, target.trim_start_matches('/'))
    }

    /// Issue one request and decode the JSON response body.
    ///
    /// Empty success bodies decode as JSON null, so targets that return
    /// no content can be parameterized at `Value` or `Option<T>`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        target: &str,
        body: Option<&Value>,
    ) -> AppResult<T> {
        let url = self.url_for(target);
        tracing::debug!(%url, ?method, "issuing request");

        let mut request = self
            .client
            .request(method.into(), &url)
            .header(CONTENT_TYPE, "application/json");
        if method.sends_body() {
            if let Some(body) = body {
                request = request.json(body);
            }
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(error_from_response(status, &text));
        }

        let value: Value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };
        Ok(serde_json::from_value(value)?)
    }
}

/// Non-2xx response body shapes: 400 carries a field-keyed map of
/// validation messages, everything else carries `{message}`.
fn error_from_response(status: StatusCode, body: &str) -> AppError {
    if status == StatusCode::BAD_REQUEST {
        if let Ok(fields) = serde_json::from_str::<FieldErrors>(body) {
            return AppError::Validation(fields);
        }
    }

    #[derive(Deserialize)]
    struct MessageBody {
        message: String,
    }

    let message = serde_json::from_str::<MessageBody>(body)
        .map(|parsed| parsed.message)
        .unwrap_or_else(|_| {
            if body.is_empty() {
                status.to_string()
            } else {
                body.to_string()
            }
        });

    AppError::Api {
        status: status.as_u16(),
        message,
    }
}
