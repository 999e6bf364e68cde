//! Page views, one module per route.
//!
//! Every page follows the same contract: local signal-backed form state,
//! one request per submit, success mapped to a message (plus reset or
//! navigation), failure mapped to a message extracted from the response
//! body when present and a generic fallback otherwise.

pub mod admin;
pub mod home;
pub mod login;
pub mod register;
pub mod request_reset;
pub mod reset_password;
pub mod squad;
