//
//  teamcity-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the TeamCity REST client
//!
//! This module provides the types shared by every request the client makes:
//! the error taxonomy and the interpreted response body.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ResponseBody`] - What a single request produced (nothing, JSON or raw bytes)
//! - [`error_from_status`] - Maps a non-success status and its body to an [`ApiError`]
//!
//! # Example
//!
//! ```rust
//! use teamcity_client::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::AuthFailed(msg)) => println!("Check your credentials: {}", msg),
//!         Err(ApiError::NotFound(resource)) => println!("Resource not found: {}", resource),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Unified error type for all TeamCity API operations.
///
/// Every non-success HTTP status is surfaced as one of these variants so the
/// caller can tell a failed call apart from a successful one.
///
/// # Variants
///
/// | Variant | Description | HTTP Status |
/// |---------|-------------|-------------|
/// | `AuthFailed` | Invalid credentials | 401 |
/// | `Forbidden` | Insufficient permissions | 403 |
/// | `NotFound` | Requested entity does not exist | 404 |
/// | `BadRequest` | Invalid request parameters or payload | 400 |
/// | `ServerError` | Internal server error | 5xx |
/// | `Status` | Any other non-success status | other |
/// | `Network` | Connection or transport failure | N/A |
/// | `Json` | A JSON body could not be parsed | N/A |
/// | `UnexpectedResponse` | A successful response had the wrong shape | N/A |
/// | `UnknownParameters` | Parameter names the server does not know | N/A |
/// | `Payload` | A request body could not be built | N/A |
/// | `InvalidConfig` | Connection settings are unusable | N/A |
#[derive(Error, Debug)]
pub enum ApiError {
    /// Authentication failed due to invalid credentials.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// The authenticated user lacks the permission for this operation.
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// The requested project, build type or template does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The server rejected the request as malformed.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The TeamCity server failed while processing the request (HTTP 5xx).
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// The numeric HTTP status code
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// A non-success status without a dedicated variant.
    #[error("HTTP {status}: {message}")]
    Status {
        /// The numeric HTTP status code
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A body declared as JSON could not be parsed, or a payload could not be serialized.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered successfully but not with the expected content.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Parameter names that do not exist on the build type.
    ///
    /// Raised by the parameter update before anything is written.
    #[error("Ensure the parameters exist in the server: {}", .0.join("."))]
    UnknownParameters(Vec<String>),

    /// A request body could not be produced.
    #[error("Failed to build request payload: {0}")]
    Payload(String),

    /// The connection settings cannot produce a usable base URL.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// Returns the HTTP status carried by this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::BadRequest(_) => Some(400),
            Self::ServerError { status, .. } | Self::Status { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// The interpreted body of a single TeamCity response.
///
/// Produced by [`TeamCityClient::send_request`](crate::api::TeamCityClient::send_request).
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// HTTP 204, the server returned no content.
    Empty,
    /// The response declared a JSON content type and was parsed.
    Json(Value),
    /// Any other content type, handed back untouched.
    Raw(Vec<u8>),
}

impl ResponseBody {
    /// Returns the parsed JSON value, if the response was JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Consumes the body and returns the JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedResponse`] for empty or raw bodies.
    pub fn into_json(self) -> Result<Value, ApiError> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Empty => Err(ApiError::UnexpectedResponse(
                "expected JSON but the server returned no content".to_string(),
            )),
            Self::Raw(bytes) => Err(ApiError::UnexpectedResponse(format!(
                "expected JSON but received {} bytes of non-JSON content",
                bytes.len()
            ))),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Extracts a human readable message from a TeamCity error body.
///
/// TeamCity mostly answers errors in plain text, but JSON bodies of the form
/// `{"message": "..."}` or `{"errors": [{"message": "..."}]}` are understood too.
/// Falls back to the canonical reason phrase of the status when the body is empty.
pub fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }

        if let Some(message) = json
            .get("errors")
            .and_then(|e| e.as_array())
            .and_then(|arr| arr.first())
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

/// Maps a non-success status and its body to the matching [`ApiError`] variant.
pub fn error_from_status(status: StatusCode, body: &str) -> ApiError {
    let message = error_message(status, body);
    match status {
        StatusCode::UNAUTHORIZED => ApiError::AuthFailed(message),
        StatusCode::FORBIDDEN => ApiError::Forbidden(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::BAD_REQUEST => ApiError::BadRequest(message),
        s if s.is_server_error() => ApiError::ServerError {
            status: s.as_u16(),
            message,
        },
        s => ApiError::Status {
            status: s.as_u16(),
            message,
        },
    }
}
