// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// CORS middleware for HTTP API

use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS: any origin, method and header
///
/// The browser front end is served from a different origin than the API.
/// Credentials are not allowed since `Any` origin forbids them.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_credentials(false)
}
