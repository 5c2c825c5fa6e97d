use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::debug;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Reuse the caller's request id when present, otherwise mint `req-{nanos}`.
fn request_id_for(req: &Request<Body>) -> String {
    if let Some(v) = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return v.to_string();
    }
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
    format!("req-{nanos}")
}

/// Stamp `X-Request-Id` on the request and its response and log the outcome.
pub async fn stamp_request_id(mut req: Request<Body>, next: Next) -> Response {
    let id = request_id_for(&req);
    let header = HeaderValue::from_str(&id).ok();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    if let Some(value) = header.clone() {
        req.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let mut res = next.run(req).await;

    if let Some(value) = header {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    debug!(
        target: "api::http",
        request_id = %id,
        %method,
        path,
        status = res.status().as_u16(),
        "request served"
    );
    res
}
