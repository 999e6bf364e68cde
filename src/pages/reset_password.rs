//! Password-reset completion page, reached from the emailed link.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::util::validate;

const MISSING_TOKEN: &str = "Linkul de resetare este invalid sau incomplet.";

/// Sets a new password, authenticated by the opaque `token` query
/// parameter from the emailed link. A missing token is an unrecoverable
/// local error decided at mount; no retry is offered.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let token = use_query_map().with_untracked(|q| q.get("token"));

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(token.is_none().then(|| MISSING_TOKEN.to_owned()));
    let message = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let form_valid = Memo::new(move |_| {
        validate::strong_password(&password.get()) && password.get() == confirm.get()
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = token.clone() else {
            error.set(Some(MISSING_TOKEN.to_owned()));
            return;
        };
        if !form_valid.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            error.set(None);
            message.set(None);
            leptos::task::spawn_local(async move {
                let req = crate::net::types::ResetPasswordRequest {
                    token,
                    new_password: password.get_untracked(),
                };
                let result = crate::net::api::reset_password(&req).await;
                busy.set(false);
                match result {
                    Ok(text) => {
                        message.set(Some(text));
                        password.set(String::new());
                        confirm.set(String::new());
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    };

    let password_hint = Memo::new(move |_| {
        let value = password.get();
        (!value.is_empty() && !validate::strong_password(&value)).then_some(
            "Parola trebuie să aibă minim 8 caractere, literă mare, literă mică, cifră și simbol, fără spații.",
        )
    });
    let confirm_hint = Memo::new(move |_| {
        let value = confirm.get();
        (!value.is_empty() && value != password.get()).then_some("Parolele nu coincid.")
    });

    view! {
        <div class="auth-page">
            <h1>"Alege o parolă nouă"</h1>

            <form class="auth-form" on:submit=submit>
                <label class="auth-form__label">
                    "Parolă nouă"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {move || password_hint.get().map(|msg| view! { <span class="auth-form__hint">{msg}</span> })}
                </label>
                <label class="auth-form__label">
                    "Confirmă parola"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    {move || confirm_hint.get().map(|msg| view! { <span class="auth-form__hint">{msg}</span> })}
                </label>

                {move || error.get().map(|msg| view! { <p class="auth-form__error">{msg}</p> })}
                {move || message.get().map(|msg| view! { <p class="auth-form__success">{msg}</p> })}

                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || busy.get() || !form_valid.get()
                >
                    {move || if busy.get() { "Se trimite..." } else { "Schimbă parola" }}
                </button>
            </form>
        </div>
    }
}
