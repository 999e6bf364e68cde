//! Card for one squad member.

use leptos::prelude::*;

/// Squad card showing the player's photo (when the API has one), name,
/// and position.
#[component]
pub fn PlayerCard(name: String, position: String, image_url: Option<String>) -> impl IntoView {
    view! {
        <div class="player-card">
            {image_url
                .map(|url| {
                    view! { <img class="player-card__photo" src=url alt="" /> }
                })}
            <h3 class="player-card__name">{name}</h3>
            <p class="player-card__position">{position}</p>
        </div>
    }
}
