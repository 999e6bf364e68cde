//! Admin panel: add players and record matches.
//!
//! Deliberately has no client-side field validation; the forms post
//! whatever was typed and the server decides. A rejected request surfaces
//! the response body verbatim behind an `"Eroare: "` prefix.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::require_admin::RequireAdmin;
use crate::net::api::ApiError;
use crate::net::types::{NewMatch, NewPlayer};

/// Feedback line for a failed admin submit.
pub(crate) fn admin_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { body, .. } => format!("Eroare: {body}"),
        ApiError::Network(_) => err.user_message(),
    }
}

/// Admin page, reachable only through the admin gate.
#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <div class="admin-page">
                <h1>"Administrare"</h1>
                <AddPlayerForm/>
                <AddMatchForm/>
            </div>
        </RequireAdmin>
    }
}

/// Form for `POST /api/app/players`.
#[component]
fn AddPlayerForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let position = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let feedback = RwSignal::new(Option::<Result<String, String>>::None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            feedback.set(None);
            leptos::task::spawn_local(async move {
                let player = NewPlayer {
                    name: name.get_untracked(),
                    position: position.get_untracked(),
                    image_url: image_url.get_untracked(),
                };
                match crate::net::api::add_player(&player).await {
                    Ok(()) => {
                        feedback.set(Some(Ok("Jucător adăugat.".to_owned())));
                        name.set(String::new());
                        position.set(String::new());
                        image_url.set(String::new());
                    }
                    Err(err) => feedback.set(Some(Err(admin_error_message(&err)))),
                }
            });
        }
    };

    view! {
        <section class="admin-form">
            <h2>"Adaugă jucător"</h2>
            <form on:submit=submit>
                <AdminField label="Nume" value=name/>
                <AdminField label="Poziție" value=position/>
                <AdminField label="URL fotografie" value=image_url/>
                <FeedbackLine feedback=feedback/>
                <button class="btn btn--primary" type="submit">"Salvează"</button>
            </form>
        </section>
    }
}

/// Form for `POST /api/matches`.
#[component]
fn AddMatchForm() -> impl IntoView {
    let opponent = RwSignal::new(String::new());
    let match_date = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let home_score = RwSignal::new(String::new());
    let away_score = RwSignal::new(String::new());
    let feedback = RwSignal::new(Option::<Result<String, String>>::None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            feedback.set(None);
            leptos::task::spawn_local(async move {
                let game = NewMatch {
                    opponent: opponent.get_untracked(),
                    match_date: match_date.get_untracked(),
                    location: location.get_untracked(),
                    home_score: home_score.get_untracked(),
                    away_score: away_score.get_untracked(),
                };
                match crate::net::api::add_match(&game).await {
                    Ok(()) => {
                        feedback.set(Some(Ok("Meci adăugat.".to_owned())));
                        opponent.set(String::new());
                        match_date.set(String::new());
                        location.set(String::new());
                        home_score.set(String::new());
                        away_score.set(String::new());
                    }
                    Err(err) => feedback.set(Some(Err(admin_error_message(&err)))),
                }
            });
        }
    };

    view! {
        <section class="admin-form">
            <h2>"Adaugă meci"</h2>
            <form on:submit=submit>
                <AdminField label="Adversar" value=opponent/>
                <AdminField label="Data" value=match_date/>
                <AdminField label="Locație" value=location/>
                <AdminField label="Scor gazde" value=home_score/>
                <AdminField label="Scor oaspeți" value=away_score/>
                <FeedbackLine feedback=feedback/>
                <button class="btn btn--primary" type="submit">"Salvează"</button>
            </form>
        </section>
    }
}

/// Plain text input bound to a signal; no validation by design.
#[component]
fn AdminField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="admin-form__label">
            {label}
            <input
                class="admin-form__input"
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Success or error line under an admin form.
#[component]
fn FeedbackLine(feedback: RwSignal<Option<Result<String, String>>>) -> impl IntoView {
    move || {
        feedback.get().map(|outcome| match outcome {
            Ok(msg) => view! { <p class="admin-form__success">{msg}</p> },
            Err(msg) => view! { <p class="admin-form__error">{msg}</p> },
        })
    }
}
