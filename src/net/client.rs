//! Authenticated HTTP plumbing for the remote order/image API.
//!
//! Every screen funnels its calls through here: the token is read from the
//! session store, attached as a bearer header, and the response is collapsed
//! into the `ApiError` classification, so callers never touch headers or
//! raw status codes.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Server-side and native
//! tests: the transport stub fails with `ApiError::Network`, while the
//! token precondition and response classification stay fully exercisable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::de::DeserializeOwned;

use crate::state::session;

/// HTTP method for an API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Uniform failure classification for every API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No token in the session store; the call was never sent.
    #[error("you need to log in first")]
    Unauthenticated,
    /// The server rejected the token; the session has been cleared.
    #[error("your session has expired, please log in again")]
    Unauthorized,
    /// Transport-level failure before any response arrived.
    #[error("could not reach the server, please try again")]
    Network,
    /// The server answered with a business error (4xx/5xx other than 401).
    #[error("{0}")]
    Resource(String),
}

impl ApiError {
    /// True for the two classes the navigation guard owns: the screen must
    /// hand control back and redirect to the login page.
    pub fn needs_login(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::Unauthorized)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Issue an authenticated JSON call and decode the response body.
pub async fn request<T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
) -> ApiResult<T> {
    let token = require_token()?;
    let text = send(method, path, Some(&token), body).await?;
    decode(&text)
}

/// Issue an authenticated call and discard the response body (for DELETEs
/// and other endpoints that answer 200/204 with nothing useful).
pub async fn request_empty(
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
) -> ApiResult<()> {
    let token = require_token()?;
    send(method, path, Some(&token), body).await.map(|_| ())
}

/// Issue an unauthenticated JSON call (login, public gallery) and decode.
pub async fn request_public<T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
) -> ApiResult<T> {
    let text = send(method, path, None, body).await?;
    decode(&text)
}

/// Issue an unauthenticated call and discard the response body (register).
pub async fn request_public_empty(
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
) -> ApiResult<()> {
    send(method, path, None, body).await.map(|_| ())
}

/// Issue the authenticated multipart upload: `image` blob plus `title`.
#[cfg(feature = "hydrate")]
pub async fn upload<T: DeserializeOwned>(
    path: &str,
    file: &web_sys::File,
    title: &str,
) -> ApiResult<T> {
    let token = require_token()?;

    let form = web_sys::FormData::new().map_err(|_| ApiError::Network)?;
    let _ = form.append_with_blob("image", file);
    let _ = form.append_with_str("title", title);

    // No explicit Content-Type: the browser fills in the multipart boundary.
    let req = gloo_net::http::Request::post(path)
        .header("Authorization", &format!("Bearer {token}"))
        .body(form)
        .map_err(|_| ApiError::Network)?;

    let resp = req.send().await.map_err(|err| {
        log::warn!("{path}: transport failure: {err}");
        ApiError::Network
    })?;
    let text = read_and_classify(path, resp).await?;
    decode(&text)
}

/// Token precondition for authenticated calls: with no session the call is
/// classified immediately and nothing goes out on the wire.
fn require_token() -> ApiResult<String> {
    session::get().ok_or(ApiError::Unauthenticated)
}

/// Collapse an HTTP status plus raw body into a failure class; `None`
/// means success.
///
/// A 401 also clears the session store, so the next guard check fails and
/// the user lands back on the login screen instead of a stale view.
pub fn classify_response(status: u16, body: &str) -> Option<ApiError> {
    match status {
        401 => {
            session::clear();
            Some(ApiError::Unauthorized)
        }
        s if s >= 400 => Some(ApiError::Resource(server_message(body, s))),
        _ => None,
    }
}

/// Best-effort extraction of a human-readable message from an error body.
/// Prefers `message`, then `error`, then a generic fallback.
fn server_message(body: &str, status: u16) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("message").or_else(|| v.get("error")))
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| format!("request failed with status {status}"), str::to_owned)
}

fn decode<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    serde_json::from_str(text)
        .map_err(|_| ApiError::Resource("unexpected response from the server".to_owned()))
}

#[cfg(feature = "hydrate")]
async fn send(
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<&serde_json::Value>,
) -> ApiResult<String> {
    use gloo_net::http::RequestBuilder;

    let mut builder = RequestBuilder::new(path).method(http_method(method));
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let req = match body {
        Some(json) => builder.json(json),
        None => builder.build(),
    }
    .map_err(|err| {
        log::error!("{path}: failed to build request: {err}");
        ApiError::Network
    })?;

    let resp = req.send().await.map_err(|err| {
        log::warn!("{path}: transport failure: {err}");
        ApiError::Network
    })?;
    read_and_classify(path, resp).await
}

#[cfg(feature = "hydrate")]
async fn read_and_classify(path: &str, resp: gloo_net::http::Response) -> ApiResult<String> {
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    if let Some(err) = classify_response(status, &text) {
        log::debug!("{path}: classified {status} as {err:?}");
        return Err(err);
    }
    Ok(text)
}

#[cfg(feature = "hydrate")]
fn http_method(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Delete => gloo_net::http::Method::DELETE,
    }
}

/// Transport stub for SSR and native tests; these builds never reach the
/// network, so any call that gets past the token check fails as a
/// connectivity error.
#[cfg(not(feature = "hydrate"))]
async fn send(
    _method: Method,
    _path: &str,
    _token: Option<&str>,
    _body: Option<&serde_json::Value>,
) -> ApiResult<String> {
    Err(ApiError::Network)
}
