//! Message resolution
//!
//! Maps failure reasons to the text shown under a field. Templates are either
//! static strings or strings with `{name}` placeholders filled from the
//! outcome's parameters.

use crate::kind::FieldKind;
use crate::outcome::{Params, Reason, ValidationOutcome, MIN_AGE};

/// A message template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Static(&'static str),
    Parameterized(&'static str),
}

impl Template {
    pub fn render(&self, params: &Params) -> String {
        match self {
            Template::Static(text) => (*text).to_string(),
            Template::Parameterized(text) => substitute(text, params),
        }
    }
}

/// Default values for placeholders a caller may leave out
const PARAM_DEFAULTS: &[(&str, &str)] = &[(MIN_AGE, "18")];

/// Template for every reason
pub fn template(reason: Reason) -> Template {
    match reason {
        Reason::Required => Template::Static("This field is required."),
        Reason::PatternMismatch => Template::Static("The format is invalid."),
        Reason::TooShort => Template::Parameterized("Minimum length is {requiredLength} characters."),
        Reason::TooLong => Template::Parameterized("Maximum length is {requiredLength} characters."),
        Reason::InvalidDate => Template::Static("Please enter a valid date."),
        Reason::FutureDate => Template::Static("Date of birth cannot be in the future."),
        Reason::YearOutOfRange => Template::Static("Please enter a valid birth year."),
        Reason::UnderAge => Template::Parameterized("You must be at least {minAge} years old to register."),
        Reason::PasswordsDoNotMatch => Template::Static("Passwords do not match."),
        Reason::CannotContainSpace => Template::Static("Spaces are not allowed in this field."),
    }
}

/// Pattern-mismatch wording specific to a field kind
fn pattern_message(kind: FieldKind) -> Option<&'static str> {
    match kind {
        FieldKind::Email => Some("Please enter a valid email address."),
        FieldKind::Name => Some("Please enter a valid name with only letters and spaces."),
        FieldKind::Mobile => Some("Please enter a valid 10-digit mobile number."),
        FieldKind::Password => Some(
            "Password must contain at least 8 characters including one uppercase letter, \
             one lowercase letter, one number, and one special character (@$!%*?&).",
        ),
        FieldKind::DateOfBirth => Some("Please enter date in YYYY-MM-DD format."),
        FieldKind::ConfirmPassword => None,
    }
}

/// Display text for `reason`
pub fn resolve(reason: Reason, params: &Params) -> String {
    template(reason).render(params)
}

/// Display text for a reason given by key; unknown keys resolve to an empty string
pub fn resolve_key(key: &str, params: &Params) -> String {
    match key.parse::<Reason>() {
        Ok(reason) => resolve(reason, params),
        Err(_) => String::new(),
    }
}

/// Like [`resolve`], but with field-specific wording for pattern mismatches
pub fn resolve_for_field(kind: FieldKind, reason: Reason, params: &Params) -> String {
    match (reason, pattern_message(kind)) {
        (Reason::PatternMismatch, Some(text)) => text.to_string(),
        _ => resolve(reason, params),
    }
}

/// Display text for an outcome; empty when the outcome is valid
pub fn message_for(kind: FieldKind, outcome: &ValidationOutcome) -> String {
    match outcome {
        ValidationOutcome::Valid => String::new(),
        ValidationOutcome::Invalid { reason, params } => resolve_for_field(kind, *reason, params),
    }
}

/// Replaces `{name}` placeholders; unknown names are left as written
fn substitute(text: &str, params: &Params) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        let value = params.get(name).map(String::as_str).or_else(|| {
            PARAM_DEFAULTS
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, default)| *default)
        });

        match value {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
