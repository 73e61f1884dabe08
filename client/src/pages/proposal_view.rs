//! Proposal-view page: fetch one proposal and render it.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::line_alert::{AlertVariant, LineAlert};
use crate::components::wallet_loader::WalletLoader;
use crate::net::multisig;
use crate::net::wallet::WalletHandle;
use crate::state::proposal::ProposalViewState;
use crate::state::session::WalletSession;

/// Read-only view of a single proposal on the current multisig.
#[component]
pub fn ProposalViewPage() -> impl IntoView {
    let params = use_params_map();
    let session = expect_context::<RwSignal<WalletSession>>();
    let wallet = expect_context::<WalletHandle>();

    let contract = Memo::new(move |_| params.read().get("address").unwrap_or_default());
    let proposal_id = Memo::new(move |_| params.read().get("proposal_id").unwrap_or_default());

    let view_state = RwSignal::new(ProposalViewState::Loading);
    let fetched = RwSignal::new(false);

    // Query once the wallet gate lets the page through.
    Effect::new(move || {
        if fetched.get() {
            return;
        }
        if session.read().address().is_none() {
            return;
        }
        fetched.set(true);

        let Ok(id) = proposal_id.get().parse::<u64>() else {
            view_state.set(ProposalViewState::Failed(
                "invalid proposal id in the URL".to_owned(),
            ));
            return;
        };
        let contract_addr = contract.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local({
            let wallet = wallet.clone();
            async move {
                match multisig::fetch_proposal(&*wallet, &contract_addr, id).await {
                    Ok(proposal) => view_state.set(ProposalViewState::Loaded(proposal)),
                    Err(e) => view_state.set(ProposalViewState::Failed(e.to_string())),
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&wallet, contract_addr, id);
        }
    });

    view! {
        <WalletLoader>
            <div class="proposal-view">
                {move || {
                    match view_state.get() {
                        ProposalViewState::Loading => {
                            view! { <p class="proposal-view__loading">"Loading proposal..."</p> }
                                .into_any()
                        }
                        ProposalViewState::Loaded(proposal) => {
                            let actions = serde_json::to_string_pretty(&proposal.msgs)
                                .unwrap_or_default();
                            view! {
                                <article class="proposal-view__card">
                                    <h1 class="proposal-view__title">{proposal.title}</h1>
                                    <span class="proposal-view__status">
                                        {proposal.status.label()}
                                    </span>
                                    <p class="proposal-view__description">
                                        {proposal.description}
                                    </p>
                                    <pre class="proposal-view__actions">{actions}</pre>
                                </article>
                            }
                            .into_any()
                        }
                        ProposalViewState::Failed(message) => {
                            view! { <LineAlert variant=AlertVariant::Error msg=message/> }
                                .into_any()
                        }
                    }
                }}
            </div>
        </WalletLoader>
    }
}
