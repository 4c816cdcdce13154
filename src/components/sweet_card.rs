//! Sweet Card Component
//!
//! One catalog entry with a quantity input and purchase button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::use_app_context;
use crate::models::Sweet;
use crate::session::use_session;
use crate::utils::alert;

/// Parse the quantity input, falling back to 1 on garbage.
/// Range enforcement beyond the input attributes is the server's job.
fn desired_quantity(raw: &str) -> u32 {
    raw.parse().unwrap_or(1)
}

/// The purchase button is disabled exactly when the shelf is empty
fn purchase_disabled(quantity: u32) -> bool {
    quantity == 0
}

/// Purchase card for a single sweet
#[component]
pub fn SweetCard(sweet: Sweet) -> impl IntoView {
    let session = use_session();
    let ctx = use_app_context();
    let (qty, set_qty) = signal(1u32);

    let id = sweet.id;
    let sold_out = purchase_disabled(sweet.quantity);

    let purchase = move |_| {
        let quantity = qty.get();
        spawn_local(async move {
            match api::purchase_sweet(session, id, quantity).await {
                Ok(()) => {
                    alert("Purchased!");
                    ctx.invalidate_catalog();
                }
                Err(e) => {
                    log::error!("Purchase of sweet {} failed: {}", id, e);
                    alert("Purchase failed");
                }
            }
        });
    };

    view! {
        <div class="sweet-card">
            <b>{sweet.name.clone()}</b>
            " — " {sweet.quantity} " left, ₹" {sweet.price}
            <br />
            <input
                type="number"
                min="1"
                max=sweet.quantity.to_string()
                prop:value=move || qty.get().to_string()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_qty.set(desired_quantity(&input.value()));
                }
            />
            <button on:click=purchase disabled=sold_out>
                "Purchase"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desired_quantity_parses_or_defaults() {
        assert_eq!(desired_quantity("3"), 3);
        assert_eq!(desired_quantity(""), 1);
        assert_eq!(desired_quantity("abc"), 1);
        assert_eq!(desired_quantity("-2"), 1);
    }

    #[test]
    fn purchase_disabled_only_when_sold_out() {
        assert!(purchase_disabled(0));
        assert!(!purchase_disabled(1));
        assert!(!purchase_disabled(100));
    }
}
