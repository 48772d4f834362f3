//! Edit-order page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Edit form for one order, pre-populated from a GET by id. Update puts
/// the new details; delete goes through an explicit confirm step first.
#[component]
pub fn EditOrderPage() -> impl IntoView {
    let params = use_params_map();
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let order_id = move || params.read().get("id").unwrap_or_default();

    let details = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let confirm_delete = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    // Pre-populate the form from the server.
    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        let id = order_id();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_order(&id).await {
                Ok(order) => details.set(order.order_details),
                Err(err) if err.needs_login() => {
                    navigate("/login", leptos_router::NavigateOptions::default());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    }

    #[cfg(feature = "hydrate")]
    let update_navigate = navigate.clone();

    let on_update = move |_| {
        let text = details.get();
        if text.trim().is_empty() {
            error.set(Some("Please enter the order details".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = update_navigate.clone();
            let id = order_id();
            saving.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::update_order(&id, text.trim()).await {
                    Ok(_) => navigate("/orders", leptos_router::NavigateOptions::default()),
                    Err(err) if err.needs_login() => {
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        }
    };

    let on_delete = move |_| {
        // First click arms the button, second click deletes.
        if !confirm_delete.get_untracked() {
            confirm_delete.set(true);
            return;
        }
        confirm_delete.set(false);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let id = order_id();
            saving.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_order(&id).await {
                    Ok(()) => navigate("/orders", leptos_router::NavigateOptions::default()),
                    Err(err) if err.needs_login() => {
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        }
    };

    view! {
        <div class="order-form-page">
            <h1>"Edit Order"</h1>

            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            <textarea
                class="order-form-page__details"
                prop:value=move || details.get()
                on:input=move |ev| details.set(event_target_value(&ev))
            ></textarea>

            <div class="order-form-page__actions">
                <button class="btn btn--primary" on:click=on_update disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Update" }}
                </button>
                <button class="btn btn--danger" on:click=on_delete disabled=move || saving.get()>
                    {move || if confirm_delete.get() { "Really delete?" } else { "Delete" }}
                </button>
            </div>
        </div>
    }
}
