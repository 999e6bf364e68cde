use super::*;

// =============================================================
// URL construction
// =============================================================

#[test]
fn api_url_is_relative_by_default() {
    assert_eq!(api_url("/api/auth/status"), "/api/auth/status");
}

#[test]
fn google_oauth_url_points_at_server_endpoint() {
    assert!(google_oauth_url().ends_with("/oauth2/authorization/google"));
}
