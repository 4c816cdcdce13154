//! Home Page
//!
//! Storefront catalog: one purchase card per sweet.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::SweetCard;
use crate::context::use_app_context;
use crate::models::Sweet;
use crate::session::use_session;
use crate::utils::alert;

/// Catalog listing with purchase cards
#[component]
pub fn Home() -> impl IntoView {
    let session = use_session();
    let ctx = use_app_context();
    let (sweets, set_sweets) = signal(Vec::<Sweet>::new());

    // Load on mount and whenever a mutation invalidates the catalog
    Effect::new(move |_| {
        let _ = ctx.catalog_version.get();
        spawn_local(async move {
            match api::list_sweets(session).await {
                Ok(loaded) => set_sweets.set(loaded),
                Err(e) => {
                    log::error!("Failed to load sweets: {}", e);
                    alert("Failed to load sweets");
                }
            }
        });
    });

    view! {
        <div class="catalog">
            <h2>"Sweets"</h2>
            // quantity is part of the key so a refetch re-renders the card
            <For
                each=move || sweets.get()
                key=|sweet| (sweet.id, sweet.quantity)
                children=move |sweet: Sweet| view! { <SweetCard sweet /> }
            />
        </div>
    }
}
