//! Pages
//!
//! One component per route.

mod admin;
mod home;
mod login;
mod register;

pub use admin::Admin;
pub use home::Home;
pub use login::Login;
pub use register::Register;
