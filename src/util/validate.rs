//! Form validation predicates.
//!
//! Pure and total on `&str`; called on every keystroke to drive inline
//! error messages and submit-button enablement. These checks are a UX
//! convenience only: the server validates everything again and its answer
//! is the final authority.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use regex::Regex;

/// Symbols accepted by the password strength check.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:'\",.<>/?";

/// Maximum name length after trimming, in characters.
pub const NAME_MAX_CHARS: usize = 50;

/// Loose email shape check: `<no-space>@<no-space>.<no-space>`.
///
/// Deliberately permissive, not RFC validation; it accepts some invalid
/// addresses (consecutive dots, for one). The server rejects those.
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^\S+@\S+\.\S+$").is_ok_and(|re| re.is_match(email))
}

/// Password strength: at least 8 characters, no whitespace anywhere, and
/// at least one lowercase letter, one uppercase letter, one digit, and one
/// symbol from [`PASSWORD_SYMBOLS`].
pub fn strong_password(password: &str) -> bool {
    password.chars().count() >= 8
        && !password.chars().any(char::is_whitespace)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// Name shape for registration: after trimming, one or more runs of Latin
/// letters (plus Romanian diacritics) separated by single spaces, at most
/// [`NAME_MAX_CHARS`] characters.
pub fn valid_name(name: &str) -> bool {
    let trimmed = name.trim();
    trimmed.chars().count() <= NAME_MAX_CHARS
        && Regex::new(r"^[A-Za-zĂÂÎȘȚăâîșț]+( [A-Za-zĂÂÎȘȚăâîșț]+)*$")
            .is_ok_and(|re| re.is_match(trimmed))
}

/// Whether the registration form is submittable: every field passes its
/// check and the password confirmation matches.
pub fn register_form_valid(name: &str, email: &str, password: &str, confirm: &str) -> bool {
    valid_name(name) && valid_email(email) && strong_password(password) && password == confirm
}
