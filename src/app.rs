//! Sweet Shop Frontend App
//!
//! Router with a shell layout; session and catalog-invalidation contexts are
//! provided here for all routes.

use leptos::prelude::*;
use leptos_router::{
    components::{Outlet, ParentRoute, Route, Router, Routes},
    path,
};

use crate::components::NavBar;
use crate::context::AppContext;
use crate::pages::{Admin, Home, Login, Register};
use crate::session::Session;

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    // Session is rebuilt from durable storage once, at startup
    provide_context(Session::restore());

    let (catalog_version, set_catalog_version) = signal(0u32);
    provide_context(AppContext::new((catalog_version, set_catalog_version)));

    view! {
        <Router>
            <Routes fallback=|| "Not found">
                <ParentRoute path=path!("") view=Shell>
                    <Route path=path!("") view=Home />
                    <Route path=path!("login") view=Login />
                    <Route path=path!("register") view=Register />
                    <Route path=path!("admin") view=Admin />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Persistent frame: nav header above the active route's view
#[component]
fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}
