//! Password confirmation

use crate::outcome::{Reason, ValidationOutcome};

/// Exact, case-sensitive comparison of a password and its confirmation
///
/// Two empty strings match; callers apply `required` separately.
pub fn validate_password_match(password: &str, confirm_password: &str) -> ValidationOutcome {
    if password == confirm_password {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(Reason::PasswordsDoNotMatch)
    }
}
