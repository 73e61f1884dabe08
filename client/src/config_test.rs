use super::*;

#[test]
fn default_fee_matches_the_flat_policy() {
    let fee = default_fee();
    assert_eq!(fee.gas, "500000");
    assert_eq!(fee.amount.len(), 1);
    assert_eq!(fee.amount[0].denom, "ustars");
    assert_eq!(fee.amount[0].amount, "10000");
}

#[test]
fn site_title_is_not_blank() {
    assert!(!SITE_TITLE.trim().is_empty());
}
