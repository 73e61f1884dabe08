//! Gate that renders its children only once a wallet is connected.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that sign or query sit behind this gate, so they can assume a
//! sender address exists. The connect flow mirrors the submission flow: one
//! request in flight, terminal errors, no retry.

use leptos::prelude::*;

use crate::components::line_alert::{AlertVariant, LineAlert};
use crate::net::wallet::WalletHandle;
use crate::state::session::WalletSession;

/// Renders `children` when connected; otherwise a connect card.
#[component]
pub fn WalletLoader(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<WalletSession>>();
    let wallet = expect_context::<WalletHandle>();

    let on_connect = move |_| {
        if session.read().is_connecting() {
            return;
        }
        session.set(WalletSession::Connecting);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local({
            let wallet = wallet.clone();
            async move {
                match wallet.connect().await {
                    Ok(address) => session.set(WalletSession::Connected { address }),
                    Err(e) => session.set(WalletSession::Failed(e.to_string())),
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &wallet;
        }
    };

    view! {
        <Show
            when=move || session.read().address().is_some()
            fallback=move || {
                let on_connect = on_connect.clone();
                view! {
                    <div class="wallet-loader">
                        <button
                            class="wallet-loader__connect"
                            disabled=move || session.read().is_connecting()
                            on:click=on_connect
                        >
                            {move || {
                                if session.read().is_connecting() {
                                    "Connecting..."
                                } else {
                                    "Connect Wallet"
                                }
                            }}
                        </button>
                        {move || {
                            session.read().error().map(|message| {
                                view! {
                                    <LineAlert
                                        variant=AlertVariant::Error
                                        msg=message.to_owned()
                                    />
                                }
                            })
                        }}
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
