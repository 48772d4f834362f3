//! Create-order page.

use leptos::prelude::*;

/// New-order form. Details are required client-side; on success the user
/// goes back to the list, which re-fetches on mount.
#[component]
pub fn CreateOrderPage() -> impl IntoView {
    let details = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = details.get();
        if text.trim().is_empty() {
            error.set(Some("Please enter the order details".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            saving.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::create_order(text.trim()).await {
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

    view! {
        <div class="order-form-page">
            <h1>"Create Order"</h1>

            <form on:submit=submit>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <textarea
                    class="order-form-page__details"
                    prop:value=move || details.get()
                    on:input=move |ev| details.set(event_target_value(&ev))
                ></textarea>

                <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Creating..." } else { "Create" }}
                </button>
            </form>
        </div>
    }
}
