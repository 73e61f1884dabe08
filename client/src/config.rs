//! Build-time configuration: site chrome strings and the flat fee policy.
//!
//! The site title is inlined at compile time from `PUBLIC_SITE_TITLE`, the
//! only externally supplied configuration the UI honors. Fee values are
//! constants, never computed.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use chain::{Coin, StdFee};

/// Page title, overridable at build time via `PUBLIC_SITE_TITLE`.
pub const SITE_TITLE: &str = match option_env!("PUBLIC_SITE_TITLE") {
    Some(title) => title,
    None => "Multisig",
};

/// Footer attribution link target.
pub const POWERED_BY_URL: &str = "https://stargaze.zone";

/// Fee denomination of the target chain.
pub const FEE_DENOM: &str = "ustars";

/// Flat fee amount attached to every proposal submission.
pub const FEE_AMOUNT: &str = "10000";

/// Flat gas limit attached to every proposal submission.
pub const FEE_GAS: &str = "500000";

/// The fixed fee handed to the wallet for every `propose` execution.
#[must_use]
pub fn default_fee() -> StdFee {
    StdFee {
        amount: vec![Coin::new(FEE_AMOUNT, FEE_DENOM)],
        gas: FEE_GAS.to_owned(),
    }
}
