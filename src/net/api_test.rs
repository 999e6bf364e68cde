use super::*;

// =============================================================
// ApiError display messages
// =============================================================

#[test]
fn network_error_maps_to_generic_connection_message() {
    let err = ApiError::Network("fetch aborted".into());
    assert_eq!(err.user_message(), "Eroare de conexiune. Încercați din nou.");
}

#[test]
fn status_error_surfaces_server_body() {
    let err = ApiError::Status {
        status: 409,
        body: "Email deja folosit".into(),
    };
    assert_eq!(err.user_message(), "Email deja folosit");
}

#[test]
fn status_error_with_empty_body_falls_back() {
    let err = ApiError::Status {
        status: 500,
        body: "   ".into(),
    };
    assert_eq!(err.user_message(), "A apărut o eroare. Încercați din nou.");
}

#[test]
fn error_display_includes_status_code() {
    let err = ApiError::Status {
        status: 403,
        body: "Forbidden".into(),
    };
    assert_eq!(err.to_string(), "status 403: Forbidden");
}
