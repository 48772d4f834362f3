//! Typed endpoint wrappers over the authenticated client.
//!
//! One function per remote operation; screens call these and switch on the
//! `ApiError` classification, never on paths or status codes.

#![allow(clippy::unused_async)]

use serde_json::json;

use super::client::{self, ApiResult, Method};
use super::types::{Image, Order, TokenResponse};
use crate::state::session;

/// `POST /login` — exchanges credentials for a bearer token.
///
/// # Errors
///
/// `Resource` with the server's message on bad credentials.
pub async fn login(username: &str, password: &str) -> ApiResult<TokenResponse> {
    let body = json!({ "username": username, "password": password });
    client::request_public(Method::Post, "/login", Some(&body)).await
}

/// `POST /register` — creates an account. The server answers 400 with a
/// message for duplicate usernames.
pub async fn register(username: &str, password: &str) -> ApiResult<()> {
    let body = json!({ "username": username, "password": password });
    client::request_public_empty(Method::Post, "/register", Some(&body)).await
}

/// `GET /orders` — the caller's orders, in server order.
pub async fn list_orders() -> ApiResult<Vec<Order>> {
    client::request(Method::Get, "/orders", None).await
}

/// `POST /orders` — creates an order from its details text.
pub async fn create_order(order_details: &str) -> ApiResult<Order> {
    let body = json!({ "order_details": order_details });
    client::request(Method::Post, "/orders", Some(&body)).await
}

/// `GET /orders/{id}` — one order, used to pre-populate the edit form.
pub async fn fetch_order(id: &str) -> ApiResult<Order> {
    client::request(Method::Get, &format!("/orders/{id}"), None).await
}

/// `PUT /orders/{id}` — replaces the order's details.
pub async fn update_order(id: &str, order_details: &str) -> ApiResult<Order> {
    let body = json!({ "order_details": order_details });
    client::request(Method::Put, &format!("/orders/{id}"), Some(&body)).await
}

/// `DELETE /orders/{id}`.
pub async fn delete_order(id: &str) -> ApiResult<()> {
    client::request_empty(Method::Delete, &format!("/orders/{id}"), None).await
}

/// Image list: the caller's own images when a session exists, otherwise
/// the public gallery.
pub async fn list_images() -> ApiResult<Vec<Image>> {
    if session::get().is_some() {
        client::request(Method::Get, "/user/images", None).await
    } else {
        client::request_public(Method::Get, "/images", None).await
    }
}

/// `POST /upload` — multipart image + title; answers the created record.
#[cfg(feature = "hydrate")]
pub async fn upload_image(file: &web_sys::File, title: &str) -> ApiResult<Image> {
    client::upload("/upload", file, title).await
}

/// `DELETE /images/{id}`.
pub async fn delete_image(id: &str) -> ApiResult<()> {
    client::request_empty(Method::Delete, &format!("/images/{id}"), None).await
}
