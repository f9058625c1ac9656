//! Main App Component

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::{components::*, path};
use waitlist_relay::FormRelayEndpoint;

use crate::binding::SharedEndpoint;
use crate::pages::LandingPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    match FormRelayEndpoint::hosted() {
        Ok(endpoint) => provide_context(SharedEndpoint(Arc::new(endpoint))),
        Err(err) => tracing::error!(%err, "Form relay unavailable, signups disabled"),
    }

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=LandingPage />
                </Routes>
            </main>
        </Router>
    }
}
