//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `layout` wraps every route with the page chrome; `wallet_loader` gates
//! wallet-dependent content; the rest are small presentation pieces.

pub mod layout;
pub mod line_alert;
pub mod nav;
pub mod wallet_loader;
