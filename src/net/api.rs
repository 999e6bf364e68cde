//! REST helpers for the club API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending
//! session cookies. Server-side and host builds: inert stubs, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a failed or
//! unreachable API degrades to visible messages without crashing the UI.
//! Transport failures and non-2xx statuses are kept distinct in `ApiError`
//! because pages render them differently.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{NewMatch, NewPlayer, Player, RegisterRequest, ResetPasswordRequest, User};

/// Failure of a remote call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, etc.).
    #[error("connection error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },
}

impl ApiError {
    /// Message shown to the user: the server's own words when it sent any,
    /// otherwise a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Eroare de conexiune. Încercați din nou.".to_owned(),
            Self::Status { body, .. } => {
                if body.trim().is_empty() {
                    "A apărut o eroare. Încercați din nou.".to_owned()
                } else {
                    body.clone()
                }
            }
        }
    }
}

/// Fetch the session status from `GET /api/auth/status`.
///
/// Returns `Some(user)` only for a 2xx response with `authenticated: true`;
/// every other outcome (non-2xx, transport error, `authenticated: false`)
/// is `None`.
pub async fn fetch_auth_status() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::AuthStatusResponse;

        let resp = gloo_net::http::Request::get(&super::config::api_url("/api/auth/status"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let status: AuthStatusResponse = resp.json().await.ok()?;
        status.into_user()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /api/auth/login`. The response body is opaque; only
/// the status matters, the session is carried by the cookie it sets.
pub async fn login(email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&super::config::api_url("/api/auth/login"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(status_error(resp).await)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(stub_error())
    }
}

/// Sign out via `POST /api/auth/logout`. A failure is logged and otherwise
/// ignored; the caller clears the session regardless.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let result = gloo_net::http::Request::post(&super::config::api_url("/api/auth/logout"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
        if let Err(err) = result {
            log::warn!("logout request failed: {err}");
        }
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// Returns the server's confirmation message. On a non-2xx response the
/// body's `message` field (or the raw body) becomes the error text.
pub async fn register(req: &RegisterRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::RegisterResponse;

        let resp = gloo_net::http::Request::post(&super::config::api_url("/api/auth/register"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(req)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<RegisterResponse>(&text)
            .map(|r| r.message)
            .unwrap_or(text);
        if (200..300).contains(&status) {
            Ok(message)
        } else {
            Err(ApiError::Status {
                status,
                body: message,
            })
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(stub_error())
    }
}

/// Ask for a reset link via `POST /api/auth/request-reset?email=...`.
/// Both success and failure bodies are plain text meant for display.
pub async fn request_password_reset(email: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let encoded = js_sys::encode_uri_component(email);
        let url =
            super::config::api_url(&format!("/api/auth/request-reset?email={encoded}"));
        let resp = gloo_net::http::Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        if (200..300).contains(&status) {
            Ok(text)
        } else {
            Err(ApiError::Status { status, body: text })
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(stub_error())
    }
}

/// Set a new password via `POST /api/auth/reset-password`, authenticated by
/// the opaque token from the reset email. Plain-text body either way.
pub async fn reset_password(req: &ResetPasswordRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp =
            gloo_net::http::Request::post(&super::config::api_url("/api/auth/reset-password"))
                .credentials(web_sys::RequestCredentials::Include)
                .json(req)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        if (200..300).contains(&status) {
            Ok(text)
        } else {
            Err(ApiError::Status { status, body: text })
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(stub_error())
    }
}

/// Fetch the squad from `GET /api/app/players`.
///
/// Failures are logged and render as an empty list; the squad page is
/// public and must never block on the API.
pub async fn fetch_players() -> Vec<Player> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(&super::config::api_url("/api/app/players"))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                log::warn!("player list request failed: {err}");
                return Vec::new();
            }
        };
        if !resp.ok() {
            log::warn!("player list request returned status {}", resp.status());
            return Vec::new();
        }
        match resp.json::<Vec<Player>>().await {
            Ok(players) => players,
            Err(err) => {
                log::warn!("player list response malformed: {err}");
                Vec::new()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Add a squad member via `POST /api/app/players` (admin only; the cookie
/// carries the authorization).
pub async fn add_player(player: &NewPlayer) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_admin_json(&super::config::api_url("/api/app/players"), player).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = player;
        Err(stub_error())
    }
}

/// Record a match via `POST /api/matches` (admin only).
pub async fn add_match(game: &NewMatch) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_admin_json(&super::config::api_url("/api/matches"), game).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = game;
        Err(stub_error())
    }
}

/// Shared POST for the admin forms: JSON body, cookie credentials, body
/// text preserved for the `"Eroare: "`-prefixed alert on failure.
#[cfg(feature = "hydrate")]
async fn post_admin_json<T: serde::Serialize>(url: &str, body: &T) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .credentials(web_sys::RequestCredentials::Include)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        Ok(())
    } else {
        Err(status_error(resp).await)
    }
}

/// Read a non-2xx response into a `Status` error, keeping the body text.
#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Status { status, body }
}

#[cfg(not(feature = "hydrate"))]
fn stub_error() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}
