//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod sweet_card;

pub use nav_bar::NavBar;
pub use sweet_card::SweetCard;
