use super::*;

// =============================================================
// Error line formatting
// =============================================================

#[test]
fn server_rejection_is_shown_verbatim_with_prefix() {
    let err = ApiError::Status {
        status: 400,
        body: "Numele este obligatoriu".into(),
    };
    assert_eq!(admin_error_message(&err), "Eroare: Numele este obligatoriu");
}

#[test]
fn empty_rejection_body_keeps_just_the_prefix() {
    let err = ApiError::Status {
        status: 500,
        body: String::new(),
    };
    assert_eq!(admin_error_message(&err), "Eroare: ");
}

#[test]
fn transport_failure_uses_connection_message() {
    let err = ApiError::Network("fetch failed".into());
    assert_eq!(
        admin_error_message(&err),
        "Eroare de conexiune. Încercați din nou."
    );
}
