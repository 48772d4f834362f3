//! Order list page.

use leptos::prelude::*;

use crate::state::fetch::FetchState;
use crate::state::orders::OrdersState;

/// Lists the caller's orders in server order with edit links.
///
/// The list is transient: fetched on mount, discarded on unmount. A call
/// that classifies as needing login hands control back to the guard by
/// redirecting.
#[component]
pub fn OrderListPage() -> impl IntoView {
    let state = RwSignal::new(OrdersState::default());

    #[cfg(feature = "hydrate")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        state.update(|s| s.list = FetchState::Loading);
        leptos::task::spawn_local(async move {
            match crate::net::api::list_orders().await {
                Ok(orders) => state.update(|s| s.loaded(orders)),
                Err(err) if err.needs_login() => {
                    navigate("/login", leptos_router::NavigateOptions::default());
                }
                Err(err) => state.update(|s| s.failed(err.to_string())),
            }
        });
    }

    view! {
        <div class="orders-page">
            <header class="orders-page__header">
                <h1>"Your Orders"</h1>
                <a class="btn btn--primary" href="/create">"+ New Order"</a>
            </header>

            {move || match state.get().list {
                FetchState::Idle | FetchState::Loading => {
                    view! { <p>"Loading orders..."</p> }.into_any()
                }
                FetchState::Failed(message) => {
                    view! { <p class="form-error">{message}</p> }.into_any()
                }
                FetchState::Loaded(orders) => {
                    if orders.is_empty() {
                        view! { <p>"No orders yet."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="orders-page__list">
                                {orders
                                    .into_iter()
                                    .map(|order| {
                                        let href = format!("/edit/{}", order.id);
                                        view! {
                                            <li class="orders-page__row">
                                                <span>{order.order_details}</span>
                                                <a href=href>"Edit"</a>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any()
                    }
                }
            }}
        </div>
    }
}
