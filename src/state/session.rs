//! Session store: the client's cached belief about who is signed in.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::net::types::User;

/// Authentication status, three-valued so that "not yet checked" and
/// "checked, definitely anonymous" are distinct states.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// The initial status check has not resolved yet.
    #[default]
    Unknown,
    /// The check resolved: nobody is signed in.
    Anonymous,
    /// The check resolved to this identity snapshot.
    Authenticated(User),
}

/// Shared session state, provided as `RwSignal<SessionState>` via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub status: AuthStatus,
    /// Path an unauthorized visitor attempted, recorded by the admin gate
    /// and consumed after the next successful sign-in.
    pub return_to: Option<String>,
}

impl SessionState {
    /// Current identity, if authenticated.
    pub fn user(&self) -> Option<&User> {
        match &self.status {
            AuthStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(User::is_admin)
    }

    /// Whether the initial status check has completed.
    pub fn is_resolved(&self) -> bool {
        self.status != AuthStatus::Unknown
    }

    /// Record the outcome of a status check. `None` means definitively
    /// anonymous; the status never stays `Unknown` past a resolution.
    pub fn resolve(&mut self, user: Option<User>) {
        self.status = match user {
            Some(user) => AuthStatus::Authenticated(user),
            None => AuthStatus::Anonymous,
        };
    }

    /// Drop the identity, e.g. on logout.
    pub fn clear(&mut self) {
        self.status = AuthStatus::Anonymous;
    }
}

/// Re-query `/api/auth/status` and replace the identity snapshot wholesale.
///
/// Every call hits the API; there is no caching or retry. Any failure
/// resolves to `Anonymous`, so the status always leaves `Unknown`.
pub async fn refresh(session: RwSignal<SessionState>) {
    let user = api::fetch_auth_status().await;
    session.update(|s| s.resolve(user));
}

/// Sign out: tell the server, then clear the local session no matter what
/// the server said. Callers handle navigation back to the login view.
pub async fn logout(session: RwSignal<SessionState>) {
    api::logout().await;
    session.update(SessionState::clear);
}
