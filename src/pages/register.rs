//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::models::RegisterRequest;
use crate::utils::{alert, input_value};

/// Account creation form; does not log the user in
#[component]
pub fn Register() -> impl IntoView {
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = RegisterRequest {
            username: username.get(),
            email: email.get(),
            password: password.get(),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&request).await {
                Ok(()) => {
                    alert("Registered! Now login");
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    log::error!("Registration failed: {}", e);
                    alert("Registration failed");
                }
            }
        });
    };

    view! {
        <form class="register-form" on:submit=submit>
            <h2>"Register"</h2>
            <input
                placeholder="username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(input_value(&ev))
            />
            <input
                placeholder="email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(input_value(&ev))
            />
            <input
                type="password"
                placeholder="password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(input_value(&ev))
            />
            <button type="submit">"Register"</button>
        </form>
    }
}
