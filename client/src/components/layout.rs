//! Page shell wrapping every route: title, icon, navigation, footer.
//!
//! Pure presentation; no state and no side effects beyond rendering.

use leptos::prelude::*;
use leptos_meta::{Link, Title};

use crate::components::nav::Nav;
use crate::config;

/// Layout shell for all pages.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Title text=config::SITE_TITLE/>
            <Link rel="icon" href="/pixel.png"/>
            <Nav/>
            <main class="layout__main">{children()}</main>
            <footer class="layout__footer">
                "Powered by "
                <a class="layout__powered-by" href=config::POWERED_BY_URL>
                    "Stargaze"
                </a>
            </footer>
        </div>
    }
}
