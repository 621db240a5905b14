//! Field kinds understood by the validators

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic category of a form field
///
/// Selects which pattern (if any) and which specialized rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Email,
    Password,
    Name,
    Mobile,
    DateOfBirth,
    ConfirmPassword,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field kind: {0}")]
pub struct UnknownFieldKind(pub String);

impl FieldKind {
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::Name,
        FieldKind::Mobile,
        FieldKind::DateOfBirth,
        FieldKind::ConfirmPassword,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Name => "name",
            FieldKind::Mobile => "mobile",
            FieldKind::DateOfBirth => "date-of-birth",
            FieldKind::ConfirmPassword => "confirm-password",
        }
    }

    /// Kinds validated by bespoke logic rather than a registry pattern
    pub fn is_composite(&self) -> bool {
        matches!(self, FieldKind::DateOfBirth | FieldKind::ConfirmPassword)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    /// Accepts the kebab-case name plus the camelCase keys form templates use
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(FieldKind::Email),
            "password" => Ok(FieldKind::Password),
            "name" => Ok(FieldKind::Name),
            "mobile" => Ok(FieldKind::Mobile),
            "date-of-birth" | "dateofbirth" | "dateOfBirth" | "dob" => Ok(FieldKind::DateOfBirth),
            "confirm-password" | "confirmPassword" => Ok(FieldKind::ConfirmPassword),
            other => Err(UnknownFieldKind(other.to_string())),
        }
    }
}
