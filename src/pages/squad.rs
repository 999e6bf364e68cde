//! Public squad page listing the club's players.

use leptos::prelude::*;

use crate::components::player_card::PlayerCard;

/// Squad page. The player list loads once per mount through a
/// `LocalResource`, so the fetch is dropped with the page; a failed fetch
/// is logged by the API layer and renders as an empty squad.
#[component]
pub fn SquadPage() -> impl IntoView {
    let players = LocalResource::new(|| crate::net::api::fetch_players());

    view! {
        <div class="squad-page">
            <h1>"Lotul echipei"</h1>

            <Suspense fallback=move || view! { <p>"Se încarcă lotul..."</p> }>
                {move || {
                    players
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p>"Niciun jucător de afișat."</p> }.into_any()
                            } else {
                                view! {
                                    <div class="squad-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|p| {
                                                view! {
                                                    <PlayerCard
                                                        name=p.name
                                                        position=p.position
                                                        image_url=p.image_url
                                                    />
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
