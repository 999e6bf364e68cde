//! Login page with email/password form and Google OAuth redirect.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::config;
use crate::state::session::SessionState;

/// Login form. A successful sign-in refreshes the session (the cookie set
/// by the server carries the credentials) and navigates to the path the
/// visitor originally attempted, or home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            error.set(None);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(
                    email.get_untracked().trim(),
                    &password.get_untracked(),
                )
                .await;
                busy.set(false);
                match result {
                    Ok(()) => {
                        crate::state::session::refresh(session).await;
                        let target = session
                            .with_untracked(|s| s.return_to.clone())
                            .unwrap_or_else(|| "/".to_owned());
                        session.update(|s| s.return_to = None);
                        navigate(&target, leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        error.set(Some(err.user_message()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, session);
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Autentificare"</h1>

            <form class="auth-form" on:submit=submit>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Parolă"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                {move || error.get().map(|msg| view! { <p class="auth-form__error">{msg}</p> })}

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Se trimite..." } else { "Intră în cont" }}
                </button>
            </form>

            <a class="btn btn--google" href=config::google_oauth_url()>
                "Continuă cu Google"
            </a>

            <p class="auth-page__links">
                <a href="/request-reset">"Ai uitat parola?"</a>
                <a href="/register">"Creează un cont"</a>
            </p>
        </div>
    }
}
