//! Top navigation: site brand plus the connected wallet, if any.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;

use crate::config;
use crate::state::session::WalletSession;

/// Shorten a bech32 address for display. Addresses are ASCII, so byte
/// slicing is safe here.
fn short_address(address: &str) -> String {
    if address.len() <= 13 {
        return address.to_owned();
    }
    format!("{}…{}", &address[..8], &address[address.len() - 5..])
}

/// Navigation bar shown on every page.
#[component]
pub fn Nav() -> impl IntoView {
    let session = expect_context::<RwSignal<WalletSession>>();
    let wallet_label = move || session.read().address().map(short_address);

    view! {
        <header class="nav">
            <a class="nav__brand" href="/">
                {config::SITE_TITLE}
            </a>
            <Show when=move || wallet_label().is_some()>
                <span class="nav__wallet">{move || wallet_label().unwrap_or_default()}</span>
            </Show>
        </header>
    }
}
