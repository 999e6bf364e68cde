//! Password-reset request page.

use leptos::prelude::*;

/// Asks the server to email a reset link. The endpoint answers with plain
/// text in both directions, shown verbatim as success or error.
#[component]
pub fn RequestResetPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let message = RwSignal::new(Option::<String>::None);
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
            message.set(None);
            leptos::task::spawn_local(async move {
                let result =
                    crate::net::api::request_password_reset(email.get_untracked().trim()).await;
                busy.set(false);
                match result {
                    Ok(text) => message.set(Some(text)),
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Resetare parolă"</h1>
            <p>"Introduceți adresa de email și vă trimitem un link de resetare."</p>

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

                {move || error.get().map(|msg| view! { <p class="auth-form__error">{msg}</p> })}
                {move || message.get().map(|msg| view! { <p class="auth-form__success">{msg}</p> })}

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Se trimite..." } else { "Trimite linkul" }}
                </button>
            </form>
        </div>
    }
}
