//! Build-time configuration.
//!
//! The only configurable values are the API base URL and the Google OAuth
//! client identifier, both baked in at compile time. An empty base URL
//! means same-origin relative paths, which is the deployed default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the remote API, without a trailing slash.
pub const API_BASE_URL: &str = match option_env!("UNIREA_API_BASE_URL") {
    Some(url) => url,
    None => "",
};

/// Google OAuth client identifier, exposed for diagnostics only; the OAuth
/// dance itself is driven entirely by the server redirect endpoint.
pub const OAUTH_CLIENT_ID: &str = match option_env!("UNIREA_OAUTH_CLIENT_ID") {
    Some(id) => id,
    None => "",
};

/// Prefix a relative API path with the configured base URL.
pub fn api_url(path: &str) -> String {
    format!("{API_BASE_URL}{path}")
}

/// URL the browser navigates to for the Google OAuth flow.
pub fn google_oauth_url() -> String {
    api_url("/oauth2/authorization/google")
}
