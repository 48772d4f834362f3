//! Registration page.

use leptos::prelude::*;

/// Registration form with a confirm-password check. On success the user is
/// sent to the login page; duplicate usernames surface the server message.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() || confirm.get().is_empty() {
            error.set(Some("All fields are required".to_owned()));
            return;
        }
        if pass != confirm.get() {
            error.set(Some("Passwords do not match".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            loading.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::register(user.trim(), &pass).await {
                    Ok(()) => navigate("/login", leptos_router::NavigateOptions::default()),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Register"</h1>

            <form on:submit=submit>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <label class="form-field">
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-field">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-field">
                    "Confirm Password"
                    <input
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>

                <button type="submit" class="btn btn--primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Registering..." } else { "Register" }}
                </button>
            </form>

            <p class="auth-page__switch">
                "Already have an account? " <a href="/login">"Login here"</a>
            </p>
        </div>
    }
}
