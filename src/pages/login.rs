//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::models::LoginRequest;
use crate::session::use_session;
use crate::utils::{alert, input_value};

/// Credential form; a successful login stores the token and goes to the catalog
#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest {
            username: username.get(),
            password: password.get(),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&request).await {
                Ok(auth) => {
                    session.login(auth.token);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    // Draft is kept so the user can correct and retry
                    log::error!("Login failed: {}", e);
                    alert("Login failed");
                }
            }
        });
    };

    view! {
        <form class="login-form" on:submit=submit>
            <h2>"Login"</h2>
            <input
                placeholder="username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(input_value(&ev))
            />
            <input
                type="password"
                placeholder="password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(input_value(&ev))
            />
            <button type="submit">"Login"</button>
        </form>
    }
}
