//! Sign-in page: role choice plus email/password credentials.

use leptos::prelude::*;

use crate::state::signin::{RolePicker, SigninRole, validate_credentials};

#[component]
pub fn SigninPage() -> impl IntoView {
    let roles = RwSignal::new(RolePicker::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let target = match roles.get().submit_target() {
            Ok(target) => target,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(creds) => creds,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::util::navigate::{BrowserNavigator, Navigator};

            let client = crate::net::auth_client::browser_client();
            match client.login(&email_value, &password_value).await {
                Ok(()) => BrowserNavigator.redirect(target),
                Err(crate::error::ApiError::Unauthorized) => {
                    info.set("Sign-in failed: invalid email or password".to_owned());
                    busy.set(false);
                }
                Err(e) => {
                    info.set(format!("Sign-in failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (target, email_value, password_value);
    };

    let role_button = move |role: SigninRole, label: &'static str| {
        view! {
            <button
                type="button"
                class="role-option"
                class:selected=move || roles.get().is_picked(role)
                on:click=move |_| roles.update(|r| r.pick(role))
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="signin-page">
            <div class="signin-card">
                <h1>"SmartSeat"</h1>
                <p class="signin-card__subtitle">"Sign in to book rooms and seats"</p>
                <form class="signin-form" on:submit=on_submit>
                    <div class="role-options">
                        {role_button(SigninRole::Lecturer, "Lecture")}
                        {role_button(SigninRole::Student, "Student")}
                    </div>
                    <input
                        class="signin-input"
                        type="email"
                        placeholder="you@example.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="signin-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="signin-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="signin-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
