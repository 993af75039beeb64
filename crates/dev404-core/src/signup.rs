//! Fanbase signup REST client.
//!
//! The signup backend is an external collaborator reached over two endpoints:
//!
//! - `GET /api/signups/count` → `{ "count": n }`
//! - `POST /api/signup` `{ "email", "name" }` → `{ "message": ... }`,
//!   or `400` (duplicate email), `422` (invalid email), other statuses with
//!   an optional `{ "detail": ... }` body
//!
//! Everything above the wire goes through the [`SignupApi`] trait so the
//! shell and the TUI can be exercised against a mock. [`HttpSignupApi`] is
//! the blocking binding used by the real app; requests are never cancelled
//! mid-flight — callers drop late results instead.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default backend base URL.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Environment variable overriding the backend base URL.
pub const BACKEND_URL_ENV: &str = "DEV404_BACKEND_URL";

/// Name sent when the form's name field is left empty.
pub const DEFAULT_SIGNUP_NAME: &str = "Fan";

pub const DUPLICATE_EMAIL_MESSAGE: &str = "This email is already registered in our fanbase!";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Body of `POST /api/signup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
}

impl SignupRequest {
    /// Build a request, substituting [`DEFAULT_SIGNUP_NAME`] for an empty name.
    pub fn new(email: &str, name: &str) -> Self {
        let name = if name.is_empty() {
            DEFAULT_SIGNUP_NAME
        } else {
            name
        };
        Self {
            email: email.to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SignupResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Why a signup call failed, categorized by HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    /// 400 — the email is already on the list.
    DuplicateEmail,
    /// 422 — the backend rejected the email format.
    InvalidEmail,
    /// Any other non-success status, with the server's `detail` if it sent one.
    Server { status: u16, detail: Option<String> },
    /// The request never produced a status (connect/timeout/decode).
    Network(String),
}

impl SignupError {
    /// The text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::DuplicateEmail => DUPLICATE_EMAIL_MESSAGE.to_string(),
            Self::InvalidEmail => INVALID_EMAIL_MESSAGE.to_string(),
            Self::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Server { detail: None, .. } | Self::Network(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl fmt::Display for SignupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateEmail => write!(f, "email already registered (400)"),
            Self::InvalidEmail => write!(f, "invalid email address (422)"),
            Self::Server { status, detail } => match detail {
                Some(d) => write!(f, "server error {status}: {d}"),
                None => write!(f, "server error {status}"),
            },
            Self::Network(e) => write!(f, "network error: {e}"),
        }
    }
}

impl std::error::Error for SignupError {}

/// The two operations the shell needs from the backend.
pub trait SignupApi: Send + Sync {
    /// Read the current fanbase count.
    fn fetch_count(&self) -> Result<u64, SignupError>;

    /// Register a signup. Returns the server's success message.
    fn submit(&self, request: &SignupRequest) -> Result<String, SignupError>;
}

/// Blocking REST binding of [`SignupApi`].
pub struct HttpSignupApi {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSignupApi {
    /// Client against the given base URL (trailing slashes trimmed).
    ///
    /// # Panics
    /// Panics if the underlying HTTP client cannot be constructed — a
    /// process-startup configuration failure.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Client against `DEV404_BACKEND_URL`, falling back to
    /// [`DEFAULT_BACKEND_URL`].
    pub fn from_env() -> Self {
        let base = std::env::var(BACKEND_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn error_for(status: u16, body: Option<ErrorBody>) -> SignupError {
        match status {
            400 => SignupError::DuplicateEmail,
            422 => SignupError::InvalidEmail,
            _ => SignupError::Server {
                status,
                detail: body.and_then(|b| b.detail),
            },
        }
    }
}

impl SignupApi for HttpSignupApi {
    fn fetch_count(&self) -> Result<u64, SignupError> {
        let url = format!("{}/api/signups/count", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| SignupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ErrorBody>().ok();
            return Err(Self::error_for(status.as_u16(), body));
        }

        let body: CountResponse = response
            .json()
            .map_err(|e| SignupError::Network(e.to_string()))?;
        Ok(body.count)
    }

    fn submit(&self, request: &SignupRequest) -> Result<String, SignupError> {
        let url = format!("{}/api/signup", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| SignupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ErrorBody>().ok();
            return Err(Self::error_for(status.as_u16(), body));
        }

        let body: SignupResponse = response
            .json()
            .map_err(|e| SignupError::Network(e.to_string()))?;
        Ok(body.message)
    }
}
