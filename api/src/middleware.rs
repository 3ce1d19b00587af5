use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts},
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::{Origin, UserAgent};
use std::net::SocketAddr;
use tracing::info;

/// Logs method, path, IP address, origin, and user-agent for each incoming
/// HTTP request. Automatically skips CORS preflight `OPTIONS` requests.
///
/// The peer address is read from the `ConnectInfo` extension when the server
/// was started with `into_make_service_with_connect_info`; otherwise it is
/// logged as `unknown`.
///
/// ### Fields Logged:
/// - `method`: HTTP method used (`GET`, `POST`, etc.)
/// - `path`: Requested URI path
/// - `ip`: Remote IP address of the client
/// - `origin`: Value of the `Origin` header if present
/// - `user_agent`: Value of the `User-Agent` header if present (scanner firmware tag)
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let (mut parts, body) = req.into_parts();

    let ip = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".into());

    let origin = TypedHeader::<Origin>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(o)| o.to_string());

    let user_agent = TypedHeader::<UserAgent>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(ua)| ua.to_string());

    info!(
        method = ?parts.method,
        path = %parts.uri.path(),
        ip = %ip,
        origin = origin.unwrap_or_else(|| "unknown".into()),
        user_agent = user_agent.unwrap_or_else(|| "unknown".into()),
        "Incoming request"
    );

    let req = Request::from_parts(parts, body);
    next.run(req).await
}
