use super::*;

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_accepts_basic_address() {
    assert!(valid_email("a@b.co"));
    assert!(valid_email("user@example.com"));
}

#[test]
fn email_rejects_missing_dot_or_at() {
    assert!(!valid_email("a@b"));
    assert!(!valid_email("ab.co"));
    assert!(!valid_email(""));
}

#[test]
fn email_rejects_whitespace() {
    assert!(!valid_email("a @b.co"));
    assert!(!valid_email("a@b .co"));
    assert!(!valid_email(" a@b.co"));
}

#[test]
fn email_accepts_known_loose_cases() {
    // Documented looseness: not RFC validation.
    assert!(valid_email("a@b..co"));
    assert!(valid_email("a@@b.co"));
}

// =============================================================
// Password strength
// =============================================================

#[test]
fn password_accepts_all_four_classes() {
    assert!(strong_password("Abcdef1!"));
    assert!(strong_password("parola-Mea9"));
}

#[test]
fn password_rejects_missing_class() {
    assert!(!strong_password("abcdef1!")); // no uppercase
    assert!(!strong_password("ABCDEF1!")); // no lowercase
    assert!(!strong_password("Abcdefg!")); // no digit
    assert!(!strong_password("Abcdefg1")); // no symbol
}

#[test]
fn password_rejects_short_or_spaced() {
    assert!(!strong_password("Abc1!"));
    assert!(!strong_password("Abc def1!"));
    assert!(!strong_password(" Abcdef1!"));
    assert!(!strong_password("Abcdef1!\t"));
}

// =============================================================
// Name shape
// =============================================================

#[test]
fn name_accepts_letters_and_single_spaces() {
    assert!(valid_name("Ion Popescu"));
    assert!(valid_name("Ana"));
    assert!(valid_name("  Ana Maria  ")); // trimmed before checking
}

#[test]
fn name_accepts_romanian_diacritics() {
    assert!(valid_name("Ștefan Țăranu"));
    assert!(valid_name("Înălțimea Băsescu"));
}

#[test]
fn name_rejects_digits_punctuation_and_double_spaces() {
    assert!(!valid_name("Ion3"));
    assert!(!valid_name("Ion  Popescu"));
    assert!(!valid_name("Ion-Popescu"));
    assert!(!valid_name(""));
    assert!(!valid_name("   "));
}

#[test]
fn name_rejects_over_fifty_chars() {
    let long = "A".repeat(51);
    assert!(!valid_name(&long));
    let ok = "A".repeat(50);
    assert!(valid_name(&ok));
}

// =============================================================
// Register form gating
// =============================================================

#[test]
fn register_valid_when_all_fields_pass() {
    assert!(register_form_valid(
        "Ion Popescu",
        "ion@club.ro",
        "Parola1!",
        "Parola1!"
    ));
}

#[test]
fn register_invalid_on_any_failing_field() {
    assert!(!register_form_valid("", "ion@club.ro", "Parola1!", "Parola1!"));
    assert!(!register_form_valid("Ion", "ion@club", "Parola1!", "Parola1!"));
    assert!(!register_form_valid("Ion", "ion@club.ro", "parola1!", "parola1!"));
    assert!(!register_form_valid("Ion", "ion@club.ro", "Parola1!", "Parola2!"));
}
