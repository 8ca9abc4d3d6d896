use std::net::IpAddr;

use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

/// Bearer token captured from the `Authorization` header, if any.
#[derive(Clone, Debug)]
pub struct BearerToken(pub String);

/// Client address resolved from forwarded headers.
#[derive(Clone, Copy, Debug)]
pub struct ClientAddr(pub IpAddr);

/// Authentication stub: no scheme is configured, so every request passes
/// through. A bearer token, when present, is stashed in request extensions
/// for handlers that may want it later.
pub async fn authenticate(mut req: Request, next: Next) -> Response {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string);
    if let Some(token) = token {
        debug!("bearer token present on request");
        req.extensions_mut().insert(BearerToken(token));
    }
    next.run(req).await
}

/// Resolve the originating client address from `X-Forwarded-For` when the
/// service sits behind a reverse proxy. Only the first hop is trusted.
pub async fn forwarded_headers(mut req: Request, next: Next) -> Response {
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .and_then(|s| s.parse::<IpAddr>().ok());
    if let Some(ip) = forwarded {
        debug!(client = %ip, "client address from x-forwarded-for");
        req.extensions_mut().insert(ClientAddr(ip));
    }
    next.run(req).await
}
