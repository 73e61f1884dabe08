//! Application root: router, shared context, and the SSR document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::layout::Layout;
use crate::net::wallet::WalletHandle;
use crate::pages::home::HomePage;
use crate::pages::proposal_create::ProposalCreatePage;
use crate::pages::proposal_view::ProposalViewPage;
use crate::state::session::WalletSession;

/// Document shell used by the server renderer.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: provides the wallet handle and session state, then routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(WalletHandle::new());
    provide_context(RwSignal::new(WalletSession::default()));

    view! {
        <Router>
            <Layout>
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/:address/create") view=ProposalCreatePage/>
                    <Route path=path!("/:address/:proposal_id") view=ProposalViewPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
