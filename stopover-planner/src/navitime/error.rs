//! NAVITIME client error types.

use std::fmt;

/// Errors from the NAVITIME HTTP client.
#[derive(Debug)]
pub enum NavitimeError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Rate limited by RapidAPI
    RateLimited,

    /// Missing or invalid API key
    Unauthorized,

    /// Mock data could not be loaded
    MockData(String),
}

impl fmt::Display for NavitimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavitimeError::Http(e) => write!(f, "HTTP error: {e}"),
            NavitimeError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            NavitimeError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            NavitimeError::RateLimited => write!(f, "rate limited by NAVITIME API"),
            NavitimeError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
            NavitimeError::MockData(msg) => write!(f, "mock data error: {msg}"),
        }
    }
}

impl std::error::Error for NavitimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavitimeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NavitimeError {
    fn from(err: reqwest::Error) -> Self {
        NavitimeError::Http(err)
    }
}
