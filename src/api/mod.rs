//
//  teamcity-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for TeamCity's REST API.
//!
//! ## Architecture
//!
//! - [`client`]: [`TeamCityClient`], one method per remote operation
//! - [`transport`]: The [`Transport`](transport::Transport) seam and its reqwest implementation
//! - [`payload`]: XML request bodies
//! - [`models`]: Typed views of the JSON responses
//! - [`common`]: Error type and response body
//!
//! ## Error Handling
//!
//! API errors are returned as [`ApiError`] variants:
//!
//! - `AuthFailed`: 401 Unauthorized
//! - `Forbidden`: 403 Forbidden
//! - `NotFound`: 404 Not Found
//! - `BadRequest`: 400 Bad Request
//! - `ServerError`: 5xx Server Errors
//! - `UnknownParameters`: a parameter update named parameters the build type lacks

pub mod client;

pub mod common;

pub mod models;

pub mod payload;

pub mod transport;

pub use client::TeamCityClient;

pub use common::{ApiError, ResponseBody};
