//! Image gallery page: upload form plus the image grid.
//!
//! The gallery is viewable without a session (public images); uploading
//! and deleting require one. Uploads are validated locally before any
//! network call, and mutations patch the in-memory list after their own
//! success instead of re-fetching.

use leptos::prelude::*;

use crate::state::fetch::FetchState;
use crate::state::gallery::GalleryState;
#[cfg(feature = "hydrate")]
use crate::util::upload;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let state = RwSignal::new(GalleryState::default());
    let title = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);
    // Id of the image whose delete button is armed, if any.
    let confirm_delete = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();
    #[cfg(feature = "hydrate")]
    let selected_file = RwSignal::new_local(None::<web_sys::File>);

    // Fetch on mount: own images when logged in, the public set otherwise.
    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        state.update(|s| s.list = FetchState::Loading);
        leptos::task::spawn_local(async move {
            match crate::net::api::list_images().await {
                Ok(images) => state.update(|s| s.loaded(images)),
                Err(err) if err.needs_login() => {
                    navigate("/login", leptos_router::NavigateOptions::default());
                }
                Err(err) => state.update(|s| s.failed(err.to_string())),
            }
        });
    }

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                selected_file.set(None);
                return;
            };
            // Early feedback on selection; submit re-validates with the title.
            match upload::validate_file(&file.type_(), file.size()) {
                Ok(()) => {
                    error.set(None);
                    selected_file.set(Some(file));
                }
                Err(msg) => {
                    error.set(Some(msg));
                    selected_file.set(None);
                }
            }
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    #[cfg(feature = "hydrate")]
    let upload_navigate = navigate.clone();

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = selected_file.get_untracked() else {
                error.set(Some("Please select a file and enter a title".to_owned()));
                return;
            };
            let name = title.get_untracked();
            if let Err(msg) = upload::validate_upload(&name, &file.type_(), file.size()) {
                error.set(Some(msg));
                return;
            }
            if crate::state::session::get().is_none() {
                // Viewing the public gallery is fine; uploading is not.
                upload_navigate("/login", leptos_router::NavigateOptions::default());
                return;
            }

            let navigate = upload_navigate.clone();
            uploading.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_image(&file, name.trim()).await {
                    Ok(image) => {
                        state.update(|s| s.prepend(image));
                        title.set(String::new());
                        selected_file.set(None);
                    }
                    Err(err) if err.needs_login() => {
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                uploading.set(false);
            });
        }
    };

    let on_delete = Callback::new(move |id: String| {
        // First click arms this image's button, second click deletes.
        if confirm_delete.get_untracked().as_deref() != Some(id.as_str()) {
            confirm_delete.set(Some(id));
            return;
        }
        confirm_delete.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_image(&id).await {
                    Ok(()) => state.update(|s| s.remove(&id)),
                    Err(err) if err.needs_login() => {
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
    });

    view! {
        <div class="gallery-page">
            <h1>"Images"</h1>

            <form class="gallery-page__upload" on:submit=on_upload>
                <input
                    type="text"
                    placeholder="Image title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input type="file" accept="image/*" on:change=on_file_change/>
                <button type="submit" class="btn btn--primary" disabled=move || uploading.get()>
                    {move || if uploading.get() { "Uploading..." } else { "Upload Image" }}
                </button>
            </form>

            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            {move || match state.get().list {
                FetchState::Idle | FetchState::Loading => {
                    view! { <p>"Loading images..."</p> }.into_any()
                }
                FetchState::Failed(message) => {
                    view! { <p class="form-error">{message}</p> }.into_any()
                }
                FetchState::Loaded(images) => {
                    if images.is_empty() {
                        view! { <p>"No images yet."</p> }.into_any()
                    } else {
                        view! {
                            <div class="gallery-page__grid">
                                {images
                                    .into_iter()
                                    .map(|image| {
                                        let id = image.id.clone();
                                        let armed_id = image.id.clone();
                                        let armed = move || {
                                            confirm_delete.get().as_deref()
                                                == Some(armed_id.as_str())
                                        };
                                        view! {
                                            <figure class="gallery-page__card">
                                                <img src=image.url alt=image.title.clone()/>
                                                <figcaption>{image.title}</figcaption>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| on_delete.run(id.clone())
                                                >
                                                    {move || {
                                                        if armed() { "Really delete?" } else { "Delete" }
                                                    }}
                                                </button>
                                            </figure>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any()
                    }
                }
            }}
        </div>
    }
}
