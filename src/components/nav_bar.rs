//! Navigation Bar Component
//!
//! Persistent header with route links and the logout action.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;

/// Top navigation with logout
#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let logout = move |_| {
        session.logout();
        navigate("/login", Default::default());
    };

    view! {
        <header class="nav-bar">
            <A href="/">"Home"</A>
            " | "
            <A href="/admin">"Admin"</A>
            " | "
            <A href="/login">"Login"</A>
            " | "
            <a class="logout-link" on:click=logout>
                "Logout"
            </a>
        </header>
    }
}
