//! Login and signup page.
//!
//! There is no account server: logging in only sets the session flag, and
//! signing up also keeps the contact details for the profile wizard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use prefs::SignupDraft;
use prefs::session::Landing;

use crate::state::preferences::Preferences;
use crate::util::auth::install_pending_redirect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Signup,
}

fn validate_login_input(identifier: &str, password: &str) -> Result<(), &'static str> {
    if identifier.trim().is_empty() || password.is_empty() {
        return Err("Enter your phone or email and password.");
    }
    Ok(())
}

fn validate_signup_input(name: &str, phone: &str, email: &str) -> Result<SignupDraft, &'static str> {
    let (name, phone, email) = (name.trim(), phone.trim(), email.trim());
    if name.is_empty() || phone.is_empty() || email.is_empty() {
        return Err("Please fill in all required fields");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(SignupDraft { name: name.to_owned(), phone: phone.to_owned(), email: email.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let prefs = expect_context::<Preferences>();
    let redirect = RwSignal::new(None::<&'static str>);
    install_pending_redirect(redirect, use_navigate());

    let mode = RwSignal::new(AuthMode::Login);
    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&identifier.get(), &password.get()) {
            Ok(()) => {
                prefs.login();
                redirect.set(Some(prefs.landing().path()));
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    let on_signup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_signup_input(&name.get(), &phone.get(), &email.get()) {
            Ok(draft) => {
                prefs.signup(&draft);
                redirect.set(Some(Landing::ProfileSetup.path()));
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    let switch_to = move |next: AuthMode| {
        mode.set(next);
        info.set(String::new());
    };

    view! {
        <div class="page">
            <div class="card">
                <h1>"Krishi Advisor"</h1>
                <div>
                    <button class="button button--secondary" on:click=move |_| switch_to(AuthMode::Login)>
                        "Login"
                    </button>
                    " "
                    <button class="button button--secondary" on:click=move |_| switch_to(AuthMode::Signup)>
                        "Sign Up"
                    </button>
                </div>
                <Show
                    when=move || mode.get() == AuthMode::Login
                    fallback=move || {
                        view! {
                            <form on:submit=on_signup>
                                <label class="field">
                                    <span>"Full Name"</span>
                                    <input
                                        type="text"
                                        prop:value=move || name.get()
                                        on:input=move |ev| name.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="field">
                                    <span>"Phone Number"</span>
                                    <input
                                        type="tel"
                                        prop:value=move || phone.get()
                                        on:input=move |ev| phone.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="field">
                                    <span>"Email"</span>
                                    <input
                                        type="email"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                </label>
                                <button class="button" type="submit">"Create Account"</button>
                            </form>
                        }
                    }
                >
                    <form on:submit=on_login>
                        <label class="field">
                            <span>"Phone or Email"</span>
                            <input
                                type="text"
                                prop:value=move || identifier.get()
                                on:input=move |ev| identifier.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Password"</span>
                            <input
                                type="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="button" type="submit">"Login"</button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="message message--error">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
