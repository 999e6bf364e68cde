//! Guard component for the admin subtree.

#[cfg(test)]
#[path = "require_admin_test.rs"]
mod require_admin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{AuthStatus, SessionState};

/// Outcome of evaluating the session against the admin requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Status check still unresolved; show a placeholder, do not redirect.
    Pending,
    /// Resolved but not an administrator; send them home.
    Deny,
    /// Administrator; render the protected children.
    Allow,
}

/// Pure gate rule, re-evaluated whenever the session changes.
pub fn gate_decision(status: &AuthStatus) -> GateDecision {
    match status {
        AuthStatus::Unknown => GateDecision::Pending,
        AuthStatus::Authenticated(user) if user.is_admin() => GateDecision::Allow,
        _ => GateDecision::Deny,
    }
}

/// Renders its children only for an authenticated administrator.
///
/// While the initial status check is pending it shows a placeholder; once
/// the session resolves to anyone else it redirects home, replacing the
/// history entry and recording the attempted path in the session.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        if gate_decision(&session.get().status) == GateDecision::Deny {
            let attempted = location.pathname.get_untracked();
            session.update(|s| s.return_to = Some(attempted));
            navigate(
                "/",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        {move || match gate_decision(&session.get().status) {
            GateDecision::Allow => children().into_any(),
            GateDecision::Pending => {
                view! { <p class="gate-placeholder">"Se verifică sesiunea..."</p> }.into_any()
            }
            GateDecision::Deny => view! { <p class="gate-placeholder"></p> }.into_any(),
        }}
    }
}
