//! Proposal submission and lookup against the multisig contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! One valid submission produces exactly one `execute` call with the fixed
//! fee. There are no retries, no idempotency keys, and no timeout; every
//! error is terminal for the attempt and the user resubmits.

#[cfg(test)]
#[path = "multisig_test.rs"]
mod multisig_test;

use chain::{ProposalDraft, ProposalResponse, QueryMsg, SubmissionResult};

use crate::config;
use crate::net::wallet::{SigningClient, WalletError};

/// Terminal error for one submission attempt.
///
/// The rendered text is what the form shows: validation copy for draft
/// errors, the wallet's message verbatim for rejections, and an explicit
/// description when a successful transaction lacks the expected event.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Draft(#[from] chain::DraftError),
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error(transparent)]
    Response(#[from] chain::TxParseError),
}

/// Submit an already-validated draft to the contract.
///
/// # Errors
///
/// [`SubmitError::Wallet`] when the wallet rejects, and
/// [`SubmitError::Response`] when the resolved transaction has no
/// `wasm`/`proposal_id` pair to report.
pub async fn propose(
    client: &dyn SigningClient,
    sender: &str,
    contract: &str,
    draft: ProposalDraft,
) -> Result<SubmissionResult, SubmitError> {
    let msg = draft.into_execute_msg().to_value();
    let fee = config::default_fee();
    let response = client.execute(sender, contract, &msg, &fee).await?;
    Ok(SubmissionResult::from_response(&response)?)
}

/// Validate the raw form fields and submit in one step.
///
/// Validation failures return before any wallet interaction happens.
///
/// # Errors
///
/// [`SubmitError::Draft`] for invalid fields (no call is made), plus
/// everything [`propose`] can return.
pub async fn submit_proposal(
    client: &dyn SigningClient,
    sender: &str,
    contract: &str,
    title: &str,
    description: &str,
    actions_json: &str,
) -> Result<SubmissionResult, SubmitError> {
    let draft = ProposalDraft::parse(title, description, actions_json)?;
    propose(client, sender, contract, draft).await
}

/// Fetch one proposal through the wallet's smart-query path.
///
/// # Errors
///
/// Returns the wallet's error verbatim, or
/// [`WalletError::MalformedResponse`] when the contract's reply does not
/// decode as a proposal.
pub async fn fetch_proposal(
    client: &dyn SigningClient,
    contract: &str,
    proposal_id: u64,
) -> Result<ProposalResponse, WalletError> {
    let query = QueryMsg::Proposal { proposal_id }.to_value();
    let value = client.query_smart(contract, &query).await?;
    serde_json::from_value(value).map_err(|e| WalletError::MalformedResponse(e.to_string()))
}

/// Route for viewing a proposal on its multisig.
#[must_use]
pub fn proposal_path(contract: &str, proposal_id: &str) -> String {
    format!("/{contract}/{proposal_id}")
}
