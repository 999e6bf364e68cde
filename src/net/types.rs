//! Wire types for the club API.
//!
//! Field names follow the server's camelCase JSON where they differ from
//! Rust convention. `User` is an immutable snapshot: the session replaces
//! it wholesale on every refresh, never patches it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity snapshot of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    pub email: String,
    pub role: String,
    /// Authentication method, e.g. `"LOCAL"` or `"GOOGLE"`.
    pub method: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == "ADMIN"
    }
}

/// Response of `GET /api/auth/status`.
///
/// When `authenticated` is false the identity fields are absent.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
}

impl AuthStatusResponse {
    /// Collapse the status payload into an identity, if authenticated.
    pub fn into_user(self) -> Option<User> {
        if !self.authenticated {
            return None;
        }
        Some(User {
            email: self.email.unwrap_or_default(),
            role: self.role.unwrap_or_default(),
            method: self.method.unwrap_or_default(),
        })
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`. The role is always `"USER"`;
/// administrators are promoted server-side.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: &'static str,
}

impl RegisterRequest {
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
            role: "USER",
        }
    }
}

/// Response of `POST /api/auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
}

/// Body of `POST /api/auth/reset-password`.
#[derive(Debug, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// A squad member from `GET /api/app/players`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub position: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

/// Body of `POST /api/app/players`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NewPlayer {
    pub name: String,
    pub position: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Body of `POST /api/matches`. Scores are sent as entered; the server is
/// the validation authority.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NewMatch {
    pub opponent: String,
    #[serde(rename = "matchDate")]
    pub match_date: String,
    pub location: String,
    #[serde(rename = "homeScore")]
    pub home_score: String,
    #[serde(rename = "awayScore")]
    pub away_score: String,
}
