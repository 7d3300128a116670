//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::session_provider::SessionProvider;
use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage};

/// Root application component.
///
/// The session provider sits inside the router so it can navigate, and
/// around the routes so every page shares its state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="StockSimulator"/>

        <Router>
            <SessionProvider>
                <Navbar/>
                <main class="app-main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    </Routes>
                </main>
            </SessionProvider>
        </Router>
    }
}
