//! Wallet-connection state for the current browser session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Lifecycle of the wallet connection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WalletSession {
    /// No wallet attached yet.
    #[default]
    Disconnected,
    /// A connect request is in flight.
    Connecting,
    /// Connected; `address` is the sender for every submission.
    Connected { address: String },
    /// The last connect attempt failed.
    Failed(String),
}

impl WalletSession {
    /// The connected sender address, if any.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Connected { address } => Some(address),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_connecting(&self) -> bool {
        matches!(self, Self::Connecting)
    }

    /// The last connection error, if the session is in the failed state.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
