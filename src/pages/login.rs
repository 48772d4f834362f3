//! Login page with a username/password form.

use leptos::prelude::*;

/// Login form. On success the token is persisted to the session store and
/// the user lands on the order list.
#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.trim().is_empty() {
            error.set(Some("Please fill in all fields".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            loading.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::login(user.trim(), &pass).await {
                    Ok(resp) => {
                        crate::state::session::set(&resp.token);
                        navigate("/orders", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Login"</h1>

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
                    <div class="form-field__password">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="form-field__toggle"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </label>

                <button type="submit" class="btn btn--primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>

            <p class="auth-page__switch">
                "Don't have an account? " <a href="/register">"Register here"</a>
            </p>
        </div>
    }
}
