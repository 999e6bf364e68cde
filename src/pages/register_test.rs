use super::*;

// =============================================================
// Server message classification
// =============================================================

#[test]
fn email_in_message_means_address_taken() {
    assert!(email_already_used("Email already in use"));
    assert!(email_already_used("Emailul este deja folosit"));
}

#[test]
fn plain_confirmation_is_not_a_taken_email() {
    assert!(!email_already_used("Cont creat cu succes"));
    assert!(!email_already_used(""));
}

// =============================================================
// Inline hints: silent while empty, message once invalid
// =============================================================

#[test]
fn hints_stay_silent_for_empty_fields() {
    assert!(name_error("").is_none());
    assert!(email_error("").is_none());
    assert!(password_error("").is_none());
    assert!(confirm_error("Parola1!", "").is_none());
}

#[test]
fn hints_appear_for_invalid_values() {
    assert!(name_error("Ion3").is_some());
    assert!(email_error("ion@club").is_some());
    assert!(password_error("scurta").is_some());
    assert!(confirm_error("Parola1!", "Parola2!").is_some());
}

#[test]
fn hints_clear_for_valid_values() {
    assert!(name_error("Ion Popescu").is_none());
    assert!(email_error("ion@club.ro").is_none());
    assert!(password_error("Parola1!").is_none());
    assert!(confirm_error("Parola1!", "Parola1!").is_none());
}
