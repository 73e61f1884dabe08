//! Single-line alert used for form errors and success notices.

#[cfg(test)]
#[path = "line_alert_test.rs"]
mod line_alert_test;

use leptos::prelude::*;

/// Visual flavor of the alert line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertVariant {
    Error,
    Success,
}

fn alert_class(variant: AlertVariant) -> &'static str {
    match variant {
        AlertVariant::Error => "line-alert line-alert--error",
        AlertVariant::Success => "line-alert line-alert--success",
    }
}

/// One-line alert box.
#[component]
pub fn LineAlert(variant: AlertVariant, msg: String) -> impl IntoView {
    view! {
        <div class=alert_class(variant) role="alert">
            <span>{msg}</span>
        </div>
    }
}
