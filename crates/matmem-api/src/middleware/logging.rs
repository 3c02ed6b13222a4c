// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Request/response body logging at debug level

use axum::{
    body::{Body, Bytes},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;

/// Response bodies above this size are not logged (simulation outputs are large)
const MAX_LOGGED_BODY: usize = 10_000;

/// Log JSON request bodies of POST requests and small JSON responses
pub async fn log_request_response_bodies(
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    if !tracing::enabled!(target: "matmem-api", tracing::Level::DEBUG) {
        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();

    let body_bytes = if parts.method == axum::http::Method::POST {
        let bytes = body
            .collect()
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?
            .to_bytes();
        log_json("Request body", &bytes);
        bytes
    } else {
        Bytes::new()
    };

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = body
        .collect()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .to_bytes();
    log_json("Response body", &bytes);

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

fn log_json(label: &str, bytes: &Bytes) {
    if bytes.is_empty() || bytes.len() >= MAX_LOGGED_BODY {
        return;
    }
    if let Ok(text) = std::str::from_utf8(bytes) {
        if text.starts_with('{') || text.starts_with('[') {
            tracing::debug!(target: "matmem-api", "{}: {}", label, text);
        }
    }
}
