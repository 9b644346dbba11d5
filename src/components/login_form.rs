/// Login and signup form. A successful answer replaces the session signal
/// provided by the app shell, which unlocks the upvote buttons and the
/// nutrition report.
use crate::api::{users, ApiClient, ApiError, ApiResult};
use crate::models::user::{Credentials, Session};
use crate::utils::leptos_owner::with_owner_safe;
use leptos::logging::log;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Signup,
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_context::<RwSignal<Session>>()
        .unwrap_or_else(|| create_rw_signal(Session::default()));
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let status = create_rw_signal(None::<String>);
    let pending = create_rw_signal(false);

    let submit = move |action: AuthAction| {
        let credentials = Credentials {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if credentials.username.is_empty() || credentials.password.is_empty() {
            status.set(Some("Enter a username and password".to_string()));
            return;
        }
        pending.set(true);
        let owner = Owner::current();

        spawn_local(async move {
            let client = ApiClient::from_build_env();
            let outcome = match action {
                AuthAction::Login => users::login(&client, &credentials).await,
                AuthAction::Signup => users::signup(&client, &credentials).await,
            };
            log!("[AUTH] {:?} for {} finished", action, credentials.username);
            with_owner_safe(owner, "login form", move || {
                pending.set(false);
                status.set(Some(login_status(action, &outcome)));
                if let Ok(next) = outcome {
                    session.set(next);
                    password.set(String::new());
                }
            });
        });
    };

    view! {
        <form
            class="login-form"
            on:submit=move |ev| {
                ev.prevent_default();
                submit(AuthAction::Login);
            }
        >
            <div class="title">"Log In"</div>
            <input
                type="text"
                name="username"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                type="password"
                name="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || pending.get()>"Log In"</button>
            <button
                type="button"
                disabled=move || pending.get()
                on:click=move |_| submit(AuthAction::Signup)
            >
                "Sign Up"
            </button>
            {move || status.get().map(|text| view! { <p class="login-status">{text}</p> })}
        </form>
    }
}

/// Message shown under the form once the backend has answered.
pub fn login_status(action: AuthAction, outcome: &ApiResult<Session>) -> String {
    match (action, outcome) {
        (AuthAction::Login, Ok(_)) => "Logged in".to_string(),
        (AuthAction::Signup, Ok(_)) => "Account created, you are logged in".to_string(),
        (AuthAction::Login, Err(ApiError::AuthFailed)) => "Wrong username or password".to_string(),
        (AuthAction::Signup, Err(ApiError::AuthFailed)) => "That username is not available".to_string(),
        (_, Err(ApiError::Cancelled)) => String::new(),
        (_, Err(err)) => format!("Could not reach the server: {}", err),
    }
}
