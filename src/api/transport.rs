//
//  teamcity-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The client never talks to `reqwest` directly; it hands a fully described
//! [`HttpRequest`] to a [`Transport`] and gets an [`HttpResponse`] back. The
//! default [`ReqwestTransport`] keeps one `reqwest::Client` (and therefore one
//! connection pool) for the lifetime of the client. Tests substitute their
//! own implementation to assert on outgoing requests without a live server.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};

use crate::api::common::ApiError;
use crate::auth::Credentials;

/// A single outgoing request, fully resolved.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method
    pub method: Method,
    /// Absolute URL, base URL and relative path already joined
    pub url: String,
    /// Request headers (content type, accept)
    pub headers: HeaderMap,
    /// Optional request body
    pub body: Option<String>,
    /// Basic-auth credentials attached to the request
    pub credentials: Credentials,
}

/// The parts of a response the client interprets.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    /// Value of the `Content-Type` header, if any
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns the body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Executes HTTP requests on behalf of [`TeamCityClient`](crate::api::TeamCityClient).
///
/// Implementations perform exactly one exchange per call. Status codes are
/// not interpreted here; only transport failures become errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// The default transport, backed by a shared `reqwest::Client`.
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the `tc/<version>` user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the underlying client cannot be built
    /// (for example when the TLS backend fails to initialize).
    pub fn new() -> Result<Self, ApiError> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
                .build()?,
        })
    }

    /// Wraps an existing `reqwest::Client`.
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self
            .http
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = request.credentials.apply_to_request(builder).send().await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
