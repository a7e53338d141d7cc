//! Passthrough proxy for every path the front-end does not serve
//! itself, so the backend's other endpoints (e.g. /query) stay
//! reachable through the same origin during development.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: axum::http::HeaderMap,
    body: Bytes,
) -> Response {
    let path_and_query = uri
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_else(|| uri.path());
    let url = format!("{}{}", state.backend_url, path_and_query);

    // reqwest and axum may sit on different http crate versions, so the
    // method is converted by name rather than passed through.
    let method = match reqwest::Method::from_bytes(method.as_str().as_bytes()) {
        Ok(method) => method,
        Err(_) => return StatusCode::BAD_GATEWAY.into_response(),
    };

    log::debug!("proxying {} {}", method, url);

    let mut request = state.http.request(method, &url).body(body.to_vec());
    if let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    {
        request = request.header(reqwest::header::CONTENT_TYPE, content_type);
    }

    let upstream = match request.send().await {
        Ok(upstream) => upstream,
        Err(err) => {
            log::error!("proxy request to {} failed: {}", url, err);
            return (StatusCode::BAD_GATEWAY, "Backend unreachable.").into_response();
        }
    };

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            log::error!("proxy response from {} failed: {}", url, err);
            return (StatusCode::BAD_GATEWAY, "Backend unreachable.").into_response();
        }
    };

    let mut builder = Response::builder().status(status);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }

    match builder.body(Body::from(bytes.to_vec())) {
        Ok(response) => response,
        Err(_) => StatusCode::BAD_GATEWAY.into_response(),
    }
}
