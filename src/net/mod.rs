//! Network layer: build-time configuration, wire types, and REST helpers.

pub mod api;
pub mod config;
pub mod types;
