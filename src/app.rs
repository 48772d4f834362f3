//! Root application component with routing and the document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::guard::RequireSession;
use crate::components::nav_bar::NavBar;
use crate::pages::{
    create_order::CreateOrderPage, edit_order::EditOrderPage, gallery::GalleryPage,
    login::LoginPage, orders::OrderListPage, register::RegisterPage,
};
use crate::state::session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Login and register are always reachable; the order screens sit behind
/// the session guard; the gallery has a public read-only variant and
/// gates its mutations itself.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/order-client.css"/>
        <Title text="Orders"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("orders")
                    view=|| view! { <RequireSession><OrderListPage/></RequireSession> }
                />
                <Route
                    path=StaticSegment("create")
                    view=|| view! { <RequireSession><CreateOrderPage/></RequireSession> }
                />
                <Route
                    path=(StaticSegment("edit"), ParamSegment("id"))
                    view=|| view! { <RequireSession><EditOrderPage/></RequireSession> }
                />
                <Route path=StaticSegment("images") view=GalleryPage/>
            </Routes>
        </Router>
    }
}

/// Root path: straight to the order list when a session exists, else login.
#[component]
fn HomePage() -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move || {
        let target = if session::get().is_some() { "/orders" } else { "/login" };
        navigate(target, NavigateOptions::default());
    });

    view! { <p class="redirect-note">"Redirecting..."</p> }
}
