use super::*;

// =============================================================
// AuthStatusResponse -> User
// =============================================================

#[test]
fn status_authenticated_yields_user() {
    let resp: AuthStatusResponse = serde_json::from_str(
        r#"{"authenticated":true,"email":"ana@club.ro","role":"ADMIN","method":"LOCAL"}"#,
    )
    .unwrap();
    let user = resp.into_user().unwrap();
    assert_eq!(user.email, "ana@club.ro");
    assert_eq!(user.role, "ADMIN");
    assert_eq!(user.method, "LOCAL");
}

#[test]
fn status_unauthenticated_yields_none() {
    let resp: AuthStatusResponse = serde_json::from_str(r#"{"authenticated":false}"#).unwrap();
    assert!(resp.into_user().is_none());
}

#[test]
fn status_missing_fields_default_to_empty() {
    let resp: AuthStatusResponse = serde_json::from_str(r#"{"authenticated":true}"#).unwrap();
    let user = resp.into_user().unwrap();
    assert_eq!(user.email, "");
    assert!(!user.is_admin());
}

// =============================================================
// User role checks
// =============================================================

#[test]
fn is_admin_requires_exact_role() {
    let mut user = User {
        email: "x@y.ro".into(),
        role: "USER".into(),
        method: "LOCAL".into(),
    };
    assert!(!user.is_admin());
    user.role = "ADMIN".into();
    assert!(user.is_admin());
    user.role = "admin".into();
    assert!(!user.is_admin());
}

// =============================================================
// Request body serialization
// =============================================================

#[test]
fn register_request_pins_user_role() {
    let req = RegisterRequest::new("Ion Popescu".into(), "ion@x.ro".into(), "Parola1!".into());
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["role"], "USER");
    assert_eq!(json["name"], "Ion Popescu");
}

#[test]
fn reset_request_uses_camel_case_password_field() {
    let req = ResetPasswordRequest {
        token: "tok".into(),
        new_password: "Parola1!".into(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["newPassword"], "Parola1!");
    assert!(json.get("new_password").is_none());
}

#[test]
fn new_match_serializes_camel_case_fields() {
    let m = NewMatch {
        opponent: "FC Rapid".into(),
        match_date: "2026-09-12".into(),
        location: "Acasă".into(),
        home_score: "2".into(),
        away_score: "1".into(),
    };
    let json = serde_json::to_value(&m).unwrap();
    assert_eq!(json["matchDate"], "2026-09-12");
    assert_eq!(json["homeScore"], "2");
}

// =============================================================
// Player deserialization
// =============================================================

#[test]
fn player_accepts_missing_image_url() {
    let p: Player =
        serde_json::from_str(r#"{"id":7,"name":"Dan","position":"Portar"}"#).unwrap();
    assert_eq!(p.id, 7);
    assert!(p.image_url.is_none());
}
