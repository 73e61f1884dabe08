//! Shared contract schema and transaction-log model for the multisig UI.
//!
//! This crate owns the JSON shapes exchanged with the multisig contract and
//! the wallet bridge: the `propose` execute message, the proposal query, and
//! the transaction log that gets scanned for the resulting proposal id. It is
//! pure data + validation, so both the browser client and host-side tests can
//! use it without a wallet attached.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event kind emitted by the contract on execution.
pub const WASM_EVENT: &str = "wasm";

/// Attribute key carrying the freshly created proposal id.
pub const PROPOSAL_ID_ATTR: &str = "proposal_id";

/// Error returned by [`ProposalDraft::parse`].
///
/// The rendered text is the user-facing message shown by the form; the
/// variants keep the causes separable for callers and tests.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    /// A required field was blank after trimming.
    #[error("All fields are required.")]
    MissingField,
    /// The message text is not valid JSON at all.
    #[error("Error in JSON message.")]
    MalformedJson(#[source] serde_json::Error),
    /// The message text parsed, but is not an array of known action envelopes.
    #[error("Error in JSON message.")]
    NotAnActionArray(#[source] serde_json::Error),
}

/// Error returned by [`SubmissionResult::from_response`] when a successful
/// transaction does not carry the expected event or attribute.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TxParseError {
    /// No event of the expected kind appears in any log.
    #[error("transaction succeeded but no `{0}` event was found in its logs")]
    MissingEvent(String),
    /// The event exists but lacks the expected attribute key.
    #[error("transaction succeeded but the `{0}` event has no `{1}` attribute")]
    MissingAttribute(String, String),
}

/// A chain coin; amounts stay stringly-typed as they are on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    #[must_use]
    pub fn new(amount: impl Into<String>, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

/// Flat transaction fee handed to the wallet, never computed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: String,
}

/// One cosmos message envelope inside a proposal.
///
/// Externally tagged to match the chain's `CosmosMsg` encoding
/// (`{"bank": {...}}`, `{"wasm": {...}}`, ...). The payload bodies belong to
/// the chain, so they stay opaque JSON here; only the envelope tag is
/// validated, and unknown tags are rejected at parse time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalAction {
    Bank(Value),
    Wasm(Value),
    Staking(Value),
    Distribution(Value),
    Gov(Value),
    Ibc(Value),
    Custom(Value),
}

/// A validated proposal draft, built from the raw form fields.
///
/// Request-scoped: it exists between form submission and the wallet call and
/// is never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ProposalDraft {
    pub title: String,
    pub description: String,
    pub actions: Vec<ProposalAction>,
}

impl ProposalDraft {
    /// Validate the raw form fields into a draft.
    ///
    /// All three fields must be non-empty after trimming, and the message
    /// text must parse as a JSON array of recognized action envelopes.
    ///
    /// # Errors
    ///
    /// [`DraftError::MissingField`] for blank fields,
    /// [`DraftError::MalformedJson`] when the text is not JSON, and
    /// [`DraftError::NotAnActionArray`] when it is JSON of the wrong shape.
    pub fn parse(title: &str, description: &str, actions_json: &str) -> Result<Self, DraftError> {
        let title = title.trim();
        let description = description.trim();
        let actions_json = actions_json.trim();

        if title.is_empty() || description.is_empty() || actions_json.is_empty() {
            return Err(DraftError::MissingField);
        }

        let value: Value = serde_json::from_str(actions_json).map_err(DraftError::MalformedJson)?;
        let actions: Vec<ProposalAction> =
            serde_json::from_value(value).map_err(DraftError::NotAnActionArray)?;

        Ok(Self {
            title: title.to_owned(),
            description: description.to_owned(),
            actions,
        })
    }

    /// Consume the draft into the contract execute message.
    #[must_use]
    pub fn into_execute_msg(self) -> ExecuteMsg {
        ExecuteMsg::Propose {
            title: self.title,
            description: self.description,
            msgs: self.actions,
        }
    }
}

/// Execute messages this UI sends to the multisig contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    Propose {
        title: String,
        description: String,
        msgs: Vec<ProposalAction>,
    },
}

impl ExecuteMsg {
    /// Encode the message as the JSON value handed to the wallet.
    ///
    /// # Panics
    ///
    /// Never panics in practice; serializing string fields and
    /// already-parsed JSON values is infallible.
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Smart-query messages this UI sends to the multisig contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Proposal { proposal_id: u64 },
}

impl QueryMsg {
    /// Encode the query as the JSON value handed to the wallet.
    ///
    /// # Panics
    ///
    /// Never panics in practice; serializing an integer field is infallible.
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Lifecycle status of a proposal as reported by the contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Pending,
    Open,
    Rejected,
    Passed,
    Executed,
}

impl ProposalStatus {
    /// Human-readable label for display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Open => "Open",
            Self::Rejected => "Rejected",
            Self::Passed => "Passed",
            Self::Executed => "Executed",
        }
    }
}

/// A proposal as returned by the contract's `proposal` query.
///
/// Fields the UI does not render (expiry, threshold) are ignored on decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProposalResponse {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub status: ProposalStatus,
    #[serde(default)]
    pub msgs: Vec<ProposalAction>,
}

/// One key/value attribute on a transaction event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxAttribute {
    pub key: String,
    pub value: String,
}

/// One event emitted during transaction execution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Vec<TxAttribute>,
}

/// One log entry of a transaction (one per message in the transaction).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxLog {
    #[serde(default)]
    pub events: Vec<TxEvent>,
}

/// The wallet's resolved value for a successful contract execution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteResponse {
    #[serde(rename = "transactionHash")]
    pub transaction_hash: String,
    #[serde(default)]
    pub logs: Vec<TxLog>,
}

/// Find the first attribute value for `key` on the first event of `kind`.
///
/// Returns `None` when no such event or attribute exists; use
/// [`SubmissionResult::from_response`] when the absence should be an error.
#[must_use]
pub fn find_event_attribute<'a>(logs: &'a [TxLog], kind: &str, key: &str) -> Option<&'a str> {
    logs.iter()
        .flat_map(|log| log.events.iter())
        .find(|event| event.kind == kind)?
        .attributes
        .iter()
        .find(|attribute| attribute.key == key)
        .map(|attribute| attribute.value.as_str())
}

/// Outcome of a successful proposal submission, shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionResult {
    pub transaction_hash: String,
    pub proposal_id: String,
}

impl SubmissionResult {
    /// Derive the submission outcome from the wallet's execute response.
    ///
    /// # Errors
    ///
    /// [`TxParseError::MissingEvent`] when no `wasm` event exists, and
    /// [`TxParseError::MissingAttribute`] when the event carries no
    /// `proposal_id` attribute.
    pub fn from_response(response: &ExecuteResponse) -> Result<Self, TxParseError> {
        let event = response
            .logs
            .iter()
            .flat_map(|log| log.events.iter())
            .find(|event| event.kind == WASM_EVENT)
            .ok_or_else(|| TxParseError::MissingEvent(WASM_EVENT.to_owned()))?;

        let proposal_id = event
            .attributes
            .iter()
            .find(|attribute| attribute.key == PROPOSAL_ID_ATTR)
            .map(|attribute| attribute.value.clone())
            .ok_or_else(|| {
                TxParseError::MissingAttribute(WASM_EVENT.to_owned(), PROPOSAL_ID_ATTR.to_owned())
            })?;

        Ok(Self {
            transaction_hash: response.transaction_hash.clone(),
            proposal_id,
        })
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
