//! Load state for the proposal-view page.

#[cfg(test)]
#[path = "proposal_test.rs"]
mod proposal_test;

use chain::ProposalResponse;

/// Lifecycle of the proposal query behind the view page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProposalViewState {
    /// The smart query is in flight (or the page has not hydrated yet).
    #[default]
    Loading,
    /// The proposal was fetched.
    Loaded(ProposalResponse),
    /// The query failed; the message is user-facing.
    Failed(String),
}

impl ProposalViewState {
    #[must_use]
    pub fn proposal(&self) -> Option<&ProposalResponse> {
        match self {
            Self::Loaded(proposal) => Some(proposal),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
