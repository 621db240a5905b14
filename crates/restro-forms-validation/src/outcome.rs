//! Validation outcomes and failure reasons

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a validation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reason {
    Required,
    PatternMismatch,
    TooShort,
    TooLong,
    InvalidDate,
    FutureDate,
    YearOutOfRange,
    UnderAge,
    PasswordsDoNotMatch,
    CannotContainSpace,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown validation reason: {0}")]
pub struct UnknownReason(pub String);

impl Reason {
    pub const ALL: [Reason; 10] = [
        Reason::Required,
        Reason::PatternMismatch,
        Reason::TooShort,
        Reason::TooLong,
        Reason::InvalidDate,
        Reason::FutureDate,
        Reason::YearOutOfRange,
        Reason::UnderAge,
        Reason::PasswordsDoNotMatch,
        Reason::CannotContainSpace,
    ];

    /// Stable key used in serialized outcomes and message lookups
    pub fn key(&self) -> &'static str {
        match self {
            Reason::Required => "required",
            Reason::PatternMismatch => "pattern-mismatch",
            Reason::TooShort => "too-short",
            Reason::TooLong => "too-long",
            Reason::InvalidDate => "invalid-date",
            Reason::FutureDate => "future-date",
            Reason::YearOutOfRange => "year-out-of-range",
            Reason::UnderAge => "under-age",
            Reason::PasswordsDoNotMatch => "passwords-do-not-match",
            Reason::CannotContainSpace => "cannot-contain-space",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Reason {
    type Err = UnknownReason;

    /// Accepts the kebab-case key and the camelCase error keys used by the web forms
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reason = match s {
            "required" => Reason::Required,
            "pattern-mismatch" | "pattern" => Reason::PatternMismatch,
            "too-short" | "minlength" => Reason::TooShort,
            "too-long" | "maxlength" => Reason::TooLong,
            "invalid-date" | "invalidDate" => Reason::InvalidDate,
            "future-date" | "futureDate" => Reason::FutureDate,
            "year-out-of-range" | "yearOutOfRange" => Reason::YearOutOfRange,
            "under-age" | "underAge" => Reason::UnderAge,
            "passwords-do-not-match" | "passwordMismatch" => Reason::PasswordsDoNotMatch,
            "cannot-contain-space" | "cannotContainSpace" => Reason::CannotContainSpace,
            other => return Err(UnknownReason(other.to_string())),
        };
        Ok(reason)
    }
}

/// Template parameters attached to a failure, e.g. `requiredLength`
pub type Params = BTreeMap<String, String>;

pub const REQUIRED_LENGTH: &str = "requiredLength";
pub const MIN_AGE: &str = "minAge";
pub const MIN_YEAR: &str = "minYear";

/// Result of evaluating one rule (or a chain of rules) against a value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ValidationOutcome {
    #[default]
    Valid,
    Invalid {
        reason: Reason,
        #[serde(default, skip_serializing_if = "Params::is_empty")]
        params: Params,
    },
}

impl ValidationOutcome {
    pub fn invalid(reason: Reason) -> Self {
        ValidationOutcome::Invalid {
            reason,
            params: Params::new(),
        }
    }

    pub fn invalid_with(reason: Reason, name: &str, value: impl ToString) -> Self {
        let mut params = Params::new();
        params.insert(name.to_string(), value.to_string());
        ValidationOutcome::Invalid { reason, params }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn reason(&self) -> Option<Reason> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid { reason, .. } => Some(*reason),
        }
    }

    pub fn params(&self) -> Option<&Params> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid { params, .. } => Some(params),
        }
    }

    /// Runs `next` only when this outcome is valid; the first failure wins
    pub fn and_then(self, next: impl FnOnce() -> ValidationOutcome) -> ValidationOutcome {
        match self {
            ValidationOutcome::Valid => next(),
            invalid => invalid,
        }
    }
}
