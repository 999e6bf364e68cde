//! Reusable UI components.

pub mod nav_bar;
pub mod player_card;
pub mod require_admin;
