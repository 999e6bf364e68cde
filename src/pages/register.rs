//! Registration page with client-side pre-validation.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::util::validate;

/// The server confirms registration with a `message`; when that message
/// mentions "Email" the address is already taken and the text must be
/// shown as an error, not a confirmation.
pub(crate) fn email_already_used(message: &str) -> bool {
    message.contains("Email")
}

/// Inline error for the name field, `None` while empty or valid.
pub(crate) fn name_error(name: &str) -> Option<&'static str> {
    if name.is_empty() || validate::valid_name(name) {
        None
    } else {
        Some("Numele poate conține doar litere și spații simple (max. 50).")
    }
}

pub(crate) fn email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() || validate::valid_email(email) {
        None
    } else {
        Some("Adresa de email nu este validă.")
    }
}

pub(crate) fn password_error(password: &str) -> Option<&'static str> {
    if password.is_empty() || validate::strong_password(password) {
        None
    } else {
        Some("Parola trebuie să aibă minim 8 caractere, literă mare, literă mică, cifră și simbol, fără spații.")
    }
}

pub(crate) fn confirm_error(password: &str, confirm: &str) -> Option<&'static str> {
    if confirm.is_empty() || password == confirm {
        None
    } else {
        Some("Parolele nu coincid.")
    }
}

/// Registration form. Validation runs on every keystroke; the submit
/// button stays disabled until every field passes, and the handler
/// re-checks before calling the API so an invalid form never produces a
/// request.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let message = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let form_valid = Memo::new(move |_| {
        validate::register_form_valid(
            name.get().trim(),
            email.get().trim(),
            &password.get(),
            &confirm.get(),
        )
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form_valid.get_untracked() {
            error.set(Some("Completați corect toate câmpurile.".to_owned()));
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
                let req = crate::net::types::RegisterRequest::new(
                    name.get_untracked().trim().to_owned(),
                    email.get_untracked().trim().to_owned(),
                    password.get_untracked(),
                );
                let result = crate::net::api::register(&req).await;
                busy.set(false);
                match result {
                    Ok(msg) if email_already_used(&msg) => error.set(Some(msg)),
                    Ok(msg) => {
                        message.set(Some(msg));
                        name.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                        confirm.set(String::new());
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        }
    };

    let field = move |label: &'static str,
                      kind: &'static str,
                      value: RwSignal<String>,
                      inline: Memo<Option<&'static str>>| {
        view! {
            <label class="auth-form__label">
                {label}
                <input
                    class="auth-form__input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                {move || inline.get().map(|msg| view! { <span class="auth-form__hint">{msg}</span> })}
            </label>
        }
    };

    let name_hint = Memo::new(move |_| name_error(name.get().trim()));
    let email_hint = Memo::new(move |_| email_error(email.get().trim()));
    let password_hint = Memo::new(move |_| password_error(&password.get()));
    let confirm_hint = Memo::new(move |_| confirm_error(&password.get(), &confirm.get()));

    view! {
        <div class="auth-page">
            <h1>"Înregistrare"</h1>

            <form class="auth-form" on:submit=submit>
                {field("Nume complet", "text", name, name_hint)}
                {field("Email", "email", email, email_hint)}
                {field("Parolă", "password", password, password_hint)}
                {field("Confirmă parola", "password", confirm, confirm_hint)}

                {move || error.get().map(|msg| view! { <p class="auth-form__error">{msg}</p> })}
                {move || message.get().map(|msg| view! { <p class="auth-form__success">{msg}</p> })}

                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || busy.get() || !form_valid.get()
                >
                    {move || if busy.get() { "Se trimite..." } else { "Creează contul" }}
                </button>
            </form>

            <p class="auth-page__links">
                <a href="/login">"Ai deja cont? Autentifică-te"</a>
            </p>
        </div>
    }
}
