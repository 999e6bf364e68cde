//! Top navigation bar.
//!
//! Reads the shared session signal only; it performs no auth check of its
//! own, so it re-renders the moment the session store resolves or changes.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Navigation bar: public links always, auth links while anonymous, the
/// user's email plus logout (and the admin link for administrators) while
/// signed in.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::state::session::logout(session).await;
                navigate("/login", leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"FC Unirea"</a>
            <a class="nav-bar__link" href="/squad">"Lotul echipei"</a>
            <span class="nav-bar__spacer"></span>
            {move || {
                let state = session.get();
                match state.user() {
                    Some(user) => {
                        let email = user.email.clone();
                        let admin = user.is_admin();
                        view! {
                            <Show when=move || admin>
                                <a class="nav-bar__link" href="/admin">"Administrare"</a>
                            </Show>
                            <span class="nav-bar__user">{email}</span>
                            <button class="nav-bar__logout" on:click=on_logout.clone()>
                                "Deconectare"
                            </button>
                        }
                            .into_any()
                    }
                    None => view! {
                        <a class="nav-bar__link" href="/login">"Autentificare"</a>
                        <a class="nav-bar__link" href="/register">"Înregistrare"</a>
                    }
                        .into_any(),
                }
            }}
        </nav>
    }
}
