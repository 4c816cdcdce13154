//! Admin Page
//!
//! Inventory management: create-sweet form plus listing with delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::context::use_app_context;
use crate::models::{CreateSweetRequest, Sweet};
use crate::session::use_session;
use crate::utils::{alert, input_value};

/// Raw form state for the create-sweet form.
/// `Default` is the post-submit reset: all four fields empty.
#[derive(Clone, Debug, Default, PartialEq)]
struct SweetDraft {
    name: String,
    category: String,
    price: String,
    quantity: String,
}

impl SweetDraft {
    /// Build the create request from the raw drafts.
    /// Unparseable numeric drafts fall back to zero, like an empty form field.
    fn to_request(&self) -> CreateSweetRequest {
        CreateSweetRequest {
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price.parse().unwrap_or(0.0),
            quantity: self.quantity.parse().unwrap_or(0),
        }
    }
}

/// Admin panel with create form and deletable listing
#[component]
pub fn Admin() -> impl IntoView {
    let session = use_session();
    let ctx = use_app_context();
    let navigate = use_navigate();

    // Client-side convenience only; the server enforces the admin role
    Effect::new(move |_| {
        if !session.is_authenticated() {
            navigate("/login", Default::default());
        }
    });

    let (list, set_list) = signal(Vec::<Sweet>::new());
    let (draft, set_draft) = signal(SweetDraft::default());

    Effect::new(move |_| {
        let _ = ctx.catalog_version.get();
        spawn_local(async move {
            match api::list_sweets_admin(session).await {
                Ok(loaded) => set_list.set(loaded),
                Err(e) => {
                    log::error!("Failed to load admin listing: {}", e);
                    alert("Failed to load sweets");
                }
            }
        });
    });

    let create = move |_| {
        let request = draft.get().to_request();
        spawn_local(async move {
            match api::create_sweet(session, &request).await {
                Ok(()) => {
                    set_draft.set(SweetDraft::default());
                    ctx.invalidate_catalog();
                }
                Err(e) => {
                    log::error!("Create sweet failed: {}", e);
                    alert("Create failed");
                }
            }
        });
    };

    let delete = move |id: u64| {
        spawn_local(async move {
            match api::delete_sweet(session, id).await {
                Ok(()) => ctx.invalidate_catalog(),
                Err(e) => {
                    log::error!("Delete of sweet {} failed: {}", id, e);
                    alert("Delete failed");
                }
            }
        });
    };

    view! {
        <div class="admin">
            <h2>"Admin"</h2>
            <input
                placeholder="name"
                prop:value=move || draft.get().name
                on:input=move |ev| set_draft.update(|d| d.name = input_value(&ev))
            />
            <input
                placeholder="category"
                prop:value=move || draft.get().category
                on:input=move |ev| set_draft.update(|d| d.category = input_value(&ev))
            />
            <input
                type="number"
                placeholder="price"
                prop:value=move || draft.get().price
                on:input=move |ev| set_draft.update(|d| d.price = input_value(&ev))
            />
            <input
                type="number"
                placeholder="quantity"
                prop:value=move || draft.get().quantity
                on:input=move |ev| set_draft.update(|d| d.quantity = input_value(&ev))
            />
            <button on:click=create>"Create"</button>

            <hr />
            <For
                each=move || list.get()
                key=|sweet| sweet.id
                children=move |sweet: Sweet| {
                    let id = sweet.id;
                    view! {
                        <div class="admin-row">
                            {sweet.name.clone()} " (" {sweet.quantity} ") "
                            <button on:click=move |_| delete(id)>"Delete"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_request_parses_numeric_fields() {
        let draft = SweetDraft {
            name: "Ladoo".into(),
            category: "indian".into(),
            price: "12.5".into(),
            quantity: "4".into(),
        };
        let req = draft.to_request();
        assert_eq!(req.name, "Ladoo");
        assert_eq!(req.category, "indian");
        assert_eq!(req.price, 12.5);
        assert_eq!(req.quantity, 4);
    }

    #[test]
    fn reset_returns_draft_to_empty_defaults() {
        let filled = SweetDraft {
            name: "Barfi".into(),
            category: "indian".into(),
            price: "20".into(),
            quantity: "10".into(),
        };
        assert_ne!(filled, SweetDraft::default());

        let reset = SweetDraft::default();
        assert_eq!(reset.name, "");
        assert_eq!(reset.category, "");
        assert_eq!(reset.price, "");
        assert_eq!(reset.quantity, "");
    }

    #[test]
    fn empty_drafts_fall_back_to_zero() {
        let req = SweetDraft::default().to_request();
        assert_eq!(req.name, "");
        assert_eq!(req.category, "");
        assert_eq!(req.price, 0.0);
        assert_eq!(req.quantity, 0);
    }
}
