use super::*;

#[test]
fn default_session_is_disconnected() {
    let session = WalletSession::default();
    assert_eq!(session, WalletSession::Disconnected);
    assert!(session.address().is_none());
    assert!(!session.is_connecting());
    assert!(session.error().is_none());
}

#[test]
fn connected_session_exposes_its_address() {
    let session = WalletSession::Connected {
        address: "stars1sender".to_owned(),
    };
    assert_eq!(session.address(), Some("stars1sender"));
}

#[test]
fn failed_session_exposes_its_error() {
    let session = WalletSession::Failed("user rejected".to_owned());
    assert_eq!(session.error(), Some("user rejected"));
    assert!(session.address().is_none());
}
