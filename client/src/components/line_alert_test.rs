use super::*;

#[test]
fn error_variant_maps_to_the_error_class() {
    assert_eq!(alert_class(AlertVariant::Error), "line-alert line-alert--error");
}

#[test]
fn success_variant_maps_to_the_success_class() {
    assert_eq!(
        alert_class(AlertVariant::Success),
        "line-alert line-alert--success"
    );
}
