//! Proposal-create page: validate the form and submit through the wallet.
//!
//! SYSTEM CONTEXT
//! ==============
//! The one interesting flow in the app. Validation runs before any state
//! flag flips; a valid draft produces exactly one wallet call; the result
//! (or the error text, verbatim) lands in [`SubmissionState`].

#[cfg(test)]
#[path = "proposal_create_test.rs"]
mod proposal_create_test;

use chain::ProposalDraft;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::line_alert::{AlertVariant, LineAlert};
use crate::components::wallet_loader::WalletLoader;
use crate::net::multisig;
use crate::net::wallet::WalletHandle;
use crate::state::session::WalletSession;
use crate::state::submission::SubmissionState;

const ACTIONS_PLACEHOLDER: &str = r#"[{"bank":{"send":{"to_address":"stars153w5xhuqu3et29lgqk4dsynj6gjn96lr33wx4e","amount":[{"denom":"ustars","amount":"1000000"}]}}}]"#;

fn success_message(transaction_hash: &str) -> String {
    format!("Success! Transaction Hash: {transaction_hash}")
}

/// Proposal creation form for the multisig in the current route.
#[component]
pub fn ProposalCreatePage() -> impl IntoView {
    let params = use_params_map();
    let session = expect_context::<RwSignal<WalletSession>>();
    let wallet = expect_context::<WalletHandle>();
    let navigate = use_navigate();

    let contract = Memo::new(move |_| params.read().get("address").unwrap_or_default());

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let actions_json = RwSignal::new(String::new());
    let submission = RwSignal::new(SubmissionState::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submission.read().is_submitting() || submission.read().is_complete() {
            return;
        }
        let Some(sender) = session.read().address().map(str::to_owned) else {
            return;
        };

        // Validate before flipping any flag, so a rejected draft never
        // leaves the form stuck in the submitting state.
        let draft = match ProposalDraft::parse(
            &title.get(),
            &description.get(),
            &actions_json.get(),
        ) {
            Ok(draft) => draft,
            Err(e) => {
                submission.set(SubmissionState::Failed(e.to_string()));
                return;
            }
        };

        submission.set(SubmissionState::Submitting);
        let contract_addr = contract.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local({
            let wallet = wallet.clone();
            async move {
                match multisig::propose(&*wallet, &sender, &contract_addr, draft).await {
                    Ok(result) => submission.set(SubmissionState::Complete(result)),
                    Err(e) => submission.set(SubmissionState::Failed(e.to_string())),
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&wallet, sender, contract_addr, draft);
        }
    };

    let complete = move || submission.read().is_complete();
    let submitting = move || submission.read().is_submitting();

    view! {
        <WalletLoader>
            {
                let on_submit = on_submit.clone();
                let navigate = navigate.clone();
                view! {
                    <form class="proposal-form" on:submit=on_submit.clone()>
                        <h1 class="proposal-form__heading">"Create Proposal"</h1>

                        <label class="proposal-form__label">"Title"</label>
                        <input
                            class="proposal-form__input"
                            name="title"
                            readonly=complete
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />

                        <label class="proposal-form__label">"Description"</label>
                        <textarea
                            class="proposal-form__textarea"
                            name="description"
                            readonly=complete
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>

                        <label class="proposal-form__label">"JSON Message Array"</label>
                        <textarea
                            class="proposal-form__textarea proposal-form__textarea--json"
                            name="actions"
                            readonly=complete
                            placeholder=ACTIONS_PLACEHOLDER
                            prop:value=move || actions_json.get()
                            on:input=move |ev| actions_json.set(event_target_value(&ev))
                        ></textarea>

                        <Show when=move || !complete()>
                            <button
                                class="proposal-form__submit"
                                class=("proposal-form__submit--busy", submitting)
                                type="submit"
                                disabled=submitting
                            >
                                "Create Proposal"
                            </button>
                        </Show>

                        {move || {
                            submission.read().error().map(|message| {
                                view! {
                                    <LineAlert
                                        variant=AlertVariant::Error
                                        msg=message.to_owned()
                                    />
                                }
                            })
                        }}

                        {
                            let navigate = navigate.clone();
                            move || {
                                submission.read().result().map(|result| {
                                    let path = multisig::proposal_path(
                                        &contract.get(),
                                        &result.proposal_id,
                                    );
                                    let navigate = navigate.clone();
                                    view! {
                                        <div class="proposal-form__success">
                                            <LineAlert
                                                variant=AlertVariant::Success
                                                msg=success_message(&result.transaction_hash)
                                            />
                                            <button
                                                class="proposal-form__view"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    navigate(&path, NavigateOptions::default());
                                                }
                                            >
                                                "View Proposal"
                                            </button>
                                        </div>
                                    }
                                })
                            }
                        }
                    </form>
                }
            }
        </WalletLoader>
    }
}
