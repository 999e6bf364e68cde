//! Home page with club announcements.

use leptos::prelude::*;

/// Static announcements; editorial content lives in the repo, not the API.
const ANNOUNCEMENTS: &[(&str, &str, &str)] = &[
    (
        "2026-08-22",
        "Victorie în deplasare",
        "Echipa a câștigat cu 2-1 meciul de sâmbătă. Felicitări băieților!",
    ),
    (
        "2026-08-10",
        "Încep înscrierile la juniori",
        "Grupele de juniori U12 și U15 primesc înscrieri până la finalul lunii.",
    ),
    (
        "2026-07-30",
        "Abonamente pentru noul sezon",
        "Abonamentele pentru sezonul 2026-2027 sunt disponibile la sediul clubului.",
    ),
];

/// Home page: hero banner plus the announcement list. Also the landing
/// spot for visitors turned away by the admin gate.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"FC Unirea"</h1>
                <p>"Clubul nostru, orașul nostru."</p>
            </section>

            <section class="home-page__news">
                <h2>"Anunțuri"</h2>
                {ANNOUNCEMENTS
                    .iter()
                    .map(|(date, title, body)| {
                        view! {
                            <article class="announcement">
                                <h3>{*title}</h3>
                                <time datetime=*date>{*date}</time>
                                <p>{*body}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
