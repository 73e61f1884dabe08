//! Networking modules for the wallet boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `wallet` owns the signing-client collaborator (connection, execution,
//! smart queries); `multisig` builds the contract messages and interprets the
//! results. Nothing here broadcasts or signs — the wallet bridge does.

pub mod multisig;
pub mod wallet;
