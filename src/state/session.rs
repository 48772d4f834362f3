//! Durable bearer-token session store.
//!
//! Single source of truth for "is the user logged in, and with what token".
//! The token lives under one `localStorage` key so a session survives a
//! full reload; it is removed on explicit logout and whenever the server
//! rejects the token.
//!
//! Non-hydrate builds (SSR, native tests) keep the token in a thread-local
//! cell with identical semantics.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "order_client_token";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static TOKEN: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

/// Current bearer token, or `None` when logged out.
///
/// Never panics; a stored empty string counts as absent so it can never
/// masquerade as a live session.
pub fn get() -> Option<String> {
    read_raw().filter(|token| !token.is_empty())
}

/// Persist a token for the current and later process lifetimes.
///
/// Empty input is rejected (no-op); callers must only hand over the
/// non-empty token string from a successful login.
pub fn set(token: &str) {
    if token.is_empty() {
        return;
    }
    write_raw(Some(token));
}

/// Drop the session from memory and durable storage.
///
/// Clearing an already-empty session is a no-op, not an error.
pub fn clear() {
    write_raw(None);
}

#[cfg(feature = "hydrate")]
fn read_raw() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

#[cfg(feature = "hydrate")]
fn write_raw(token: Option<&str>) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    match token {
        Some(token) => {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
        None => {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn read_raw() -> Option<String> {
    TOKEN.with(|cell| cell.borrow().clone())
}

#[cfg(not(feature = "hydrate"))]
fn write_raw(token: Option<&str>) {
    TOKEN.with(|cell| *cell.borrow_mut() = token.map(str::to_owned));
}
