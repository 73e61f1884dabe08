//! Proposal-submission state for the create form.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use chain::SubmissionResult;

/// Lifecycle of a single proposal submission.
///
/// Exactly one submission can be in flight; the form refuses to start
/// another while in [`SubmissionState::Submitting`]. There is no timeout or
/// cancellation path, so a wallet call that never resolves leaves the form
/// submitting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing submitted yet, or the user is editing after a failure.
    #[default]
    Idle,
    /// The wallet call is in flight.
    Submitting,
    /// The proposal was created; fields become read-only.
    Complete(SubmissionResult),
    /// Validation or the wallet call failed; the message is user-facing.
    Failed(String),
}

impl SubmissionState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// The successful outcome, if the submission completed.
    #[must_use]
    pub fn result(&self) -> Option<&SubmissionResult> {
        match self {
            Self::Complete(result) => Some(result),
            _ => None,
        }
    }

    /// The terminal error message, if the submission failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
