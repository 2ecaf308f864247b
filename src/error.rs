//! Unified error types for the violations service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Unified error type for the violations service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Upstream fetch error that was not recovered.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Upstream payload did not have the expected shape.
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    /// HTTP client construction error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Upstream request errors.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connect, DNS, timeout, reset, or body read failure.
    #[error("upstream request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned HTTP {status}")]
    Status {
        /// The status code returned.
        status: reqwest::StatusCode,
    },

    /// Upstream body was not valid JSON.
    #[error("upstream body is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

impl FetchError {
    /// Whether this failure is a transport-level failure that degrades to an empty result.
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::Status { .. })
    }
}

/// Upstream payload shape errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// Top-level JSON value is not an array.
    #[error("expected a JSON array of records, got {found}")]
    NotAnArray {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// An array element is not an object.
    #[error("record {index} is not a JSON object")]
    NotAnObject {
        /// Position in the upstream array.
        index: usize,
    },

    /// A required field holds an array or object.
    #[error("record {index} has non-scalar value for field {field}")]
    NonScalarField {
        /// Position in the upstream array.
        index: usize,
        /// Upstream field name.
        field: &'static str,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
