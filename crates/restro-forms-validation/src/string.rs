//! Single-field string validators

use crate::kind::FieldKind;
use crate::outcome::{Reason, ValidationOutcome, REQUIRED_LENGTH};
use crate::pattern;

/// Fails with `required` when the value is empty or only whitespace
pub fn validate_required(value: &str) -> ValidationOutcome {
    if value.trim().is_empty() {
        ValidationOutcome::invalid(Reason::Required)
    } else {
        ValidationOutcome::Valid
    }
}

/// Checks the value against the registry pattern for `kind`
///
/// Empty values always pass (required-ness is a separate check), and kinds
/// without a registered pattern are a no-op.
pub fn validate_pattern(kind: FieldKind, value: &str) -> ValidationOutcome {
    if value.is_empty() {
        return ValidationOutcome::Valid;
    }

    match pattern::lookup(kind) {
        Some(pattern) if !pattern.matches(value) => ValidationOutcome::invalid(Reason::PatternMismatch),
        _ => ValidationOutcome::Valid,
    }
}

/// Validates length in characters against optional bounds
pub fn validate_length(value: &str, min: Option<usize>, max: Option<usize>) -> ValidationOutcome {
    let len = value.chars().count();

    if let Some(min) = min {
        if len < min {
            return ValidationOutcome::invalid_with(Reason::TooShort, REQUIRED_LENGTH, min);
        }
    }

    if let Some(max) = max {
        if len > max {
            return ValidationOutcome::invalid_with(Reason::TooLong, REQUIRED_LENGTH, max);
        }
    }

    ValidationOutcome::Valid
}

/// Fails with `cannot-contain-space` when the value contains a space
pub fn validate_no_spaces(value: &str) -> ValidationOutcome {
    if value.contains(' ') {
        ValidationOutcome::invalid(Reason::CannotContainSpace)
    } else {
        ValidationOutcome::Valid
    }
}
