use super::*;

fn admin() -> User {
    User {
        email: "admin@club.ro".into(),
        role: "ADMIN".into(),
        method: "LOCAL".into(),
    }
}

fn member() -> User {
    User {
        email: "fan@club.ro".into(),
        role: "USER".into(),
        method: "GOOGLE".into(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_session_is_unknown() {
    let state = SessionState::default();
    assert_eq!(state.status, AuthStatus::Unknown);
    assert!(!state.is_resolved());
    assert!(state.user().is_none());
    assert!(state.return_to.is_none());
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolve_with_identity_is_authenticated() {
    let mut state = SessionState::default();
    state.resolve(Some(member()));
    assert!(state.is_resolved());
    assert_eq!(state.user().unwrap().email, "fan@club.ro");
    assert_eq!(state.user().unwrap().method, "GOOGLE");
}

#[test]
fn resolve_without_identity_is_anonymous() {
    let mut state = SessionState::default();
    state.resolve(None);
    assert_eq!(state.status, AuthStatus::Anonymous);
    assert!(state.is_resolved());
    assert!(state.user().is_none());
}

#[test]
fn resolve_replaces_snapshot_wholesale() {
    let mut state = SessionState::default();
    state.resolve(Some(admin()));
    state.resolve(Some(member()));
    assert_eq!(state.user().unwrap().role, "USER");
}

#[test]
fn failed_recheck_drops_identity() {
    let mut state = SessionState::default();
    state.resolve(Some(admin()));
    state.resolve(None);
    assert!(state.user().is_none());
    assert_eq!(state.status, AuthStatus::Anonymous);
}

// =============================================================
// Role checks and clearing
// =============================================================

#[test]
fn is_admin_only_for_admin_role() {
    let mut state = SessionState::default();
    assert!(!state.is_admin());
    state.resolve(Some(member()));
    assert!(!state.is_admin());
    state.resolve(Some(admin()));
    assert!(state.is_admin());
}

#[test]
fn clear_is_anonymous_not_unknown() {
    let mut state = SessionState::default();
    state.resolve(Some(admin()));
    state.clear();
    assert_eq!(state.status, AuthStatus::Anonymous);
    assert!(state.is_resolved());
}

#[test]
fn clear_keeps_return_to() {
    let mut state = SessionState {
        status: AuthStatus::Authenticated(admin()),
        return_to: Some("/admin".into()),
    };
    state.clear();
    assert_eq!(state.return_to.as_deref(), Some("/admin"));
}
