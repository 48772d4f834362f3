//! Persistent top navigation bar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session;

/// Top nav with links to the main screens. Shows login/register when
/// logged out and a logout button when a session exists.
#[component]
pub fn NavBar() -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();

    // The session store is not reactive; re-check it whenever the route
    // changes, which covers login, logout, and the 401 redirect.
    let logged_in = move || {
        location.pathname.get();
        session::get().is_some()
    };

    let on_logout = move |_| {
        session::clear();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <a href="/">"Home"</a>
            <a href="/orders">"Orders"</a>
            <a href="/create">"Create Order"</a>
            <a href="/images">"Images"</a>
            <span class="nav-bar__spacer"></span>
            <Show
                when=logged_in
                fallback=|| {
                    view! {
                        <a href="/login">"Login"</a>
                        <a href="/register">"Register"</a>
                    }
                }
            >
                <button class="nav-bar__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
