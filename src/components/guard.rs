//! Session gate for authenticated screens.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session;

/// Wraps a screen that requires a live session.
///
/// With no token in the session store the children never render, so a
/// logged-out visit issues zero API calls; the user is sent to `/login`
/// instead. Screens that are already mounted handle the post-hoc case
/// themselves by redirecting when a call classifies as needing login.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move || {
        if session::get().is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=|| session::get().is_some()>
            {children()}
        </Show>
    }
}
