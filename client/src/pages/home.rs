//! Home page: enter a multisig address to work against.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Landing page with the multisig address form.
#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let address = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = address.get().trim().to_owned();
        if value.is_empty() {
            return;
        }
        navigate(&format!("/{value}/create"), NavigateOptions::default());
    };

    view! {
        <form class="home" on:submit=on_submit>
            <h1 class="home__heading">"Multisig"</h1>
            <label class="home__label">"Multisig Contract Address"</label>
            <input
                class="home__input"
                name="address"
                placeholder="stars1..."
                prop:value=move || address.get()
                on:input=move |ev| address.set(event_target_value(&ev))
            />
            <button class="home__submit" type="submit">
                "Create Proposal"
            </button>
        </form>
    }
}
