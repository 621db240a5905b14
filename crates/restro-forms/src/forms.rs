// File: src/forms.rs
// Purpose: The site's registration, login and contact forms

use std::fmt;
use std::str::FromStr;

use restro_forms_validation::{FieldKind, FieldValidator};
use thiserror::Error;

use crate::config::FormsConfig;
use crate::form::{CrossFieldRule, FormSpec};

/// Built-in forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormName {
    Registration,
    Login,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form '{0}' (expected registration, login or contact)")]
pub struct UnknownForm(pub String);

impl FormName {
    pub const ALL: [FormName; 3] = [FormName::Registration, FormName::Login, FormName::Contact];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormName::Registration => "registration",
            FormName::Login => "login",
            FormName::Contact => "contact",
        }
    }

    pub fn spec(&self, config: &FormsConfig) -> FormSpec {
        match self {
            FormName::Registration => registration(config),
            FormName::Login => login(config),
            FormName::Contact => contact(config),
        }
    }
}

impl fmt::Display for FormName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormName {
    type Err = UnknownForm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registration" | "register" | "sign-up" => Ok(FormName::Registration),
            "login" | "sign-in" => Ok(FormName::Login),
            "contact" | "contactus" => Ok(FormName::Contact),
            other => Err(UnknownForm(other.to_string())),
        }
    }
}

fn name_field(required: bool) -> FieldValidator {
    let validator = FieldValidator::for_kind(FieldKind::Name);
    if required {
        validator.required().pattern()
    } else {
        validator.pattern()
    }
}

fn email_field() -> FieldValidator {
    FieldValidator::for_kind(FieldKind::Email).required().pattern()
}

/// Account registration
pub fn registration(config: &FormsConfig) -> FormSpec {
    FormSpec::new(FormName::Registration.as_str())
        .field("firstName", name_field(true))
        .field("middleName", name_field(false))
        .field("lastName", name_field(true))
        .field(
            "mobile",
            FieldValidator::for_kind(FieldKind::Mobile).required().pattern(),
        )
        .field("phone", FieldValidator::for_kind(FieldKind::Mobile).pattern())
        .field(
            "dob",
            FieldValidator::for_kind(FieldKind::DateOfBirth)
                .required()
                .date_of_birth(config.date_of_birth),
        )
        .field("gender", FieldValidator::text().required())
        .field("userType", FieldValidator::text().required())
        .field("email", email_field())
        .field(
            "password",
            FieldValidator::for_kind(FieldKind::Password)
                .required()
                .length(Some(config.password.min_length), config.password.max_length)
                .pattern(),
        )
        .field(
            "confirmPassword",
            FieldValidator::for_kind(FieldKind::ConfirmPassword).required(),
        )
        .cross_field(CrossFieldRule::PasswordsMatch {
            password: "password".to_string(),
            confirm: "confirmPassword".to_string(),
        })
}

/// Sign-in with email and password
pub fn login(config: &FormsConfig) -> FormSpec {
    FormSpec::new(FormName::Login.as_str())
        .field("email", email_field())
        .field(
            "password",
            FieldValidator::for_kind(FieldKind::Password)
                .required()
                .min_length(config.login.password_min_length),
        )
}

/// Contact / reservation enquiry
pub fn contact(config: &FormsConfig) -> FormSpec {
    FormSpec::new(FormName::Contact.as_str())
        .field("firstName", name_field(true))
        .field("lastName", name_field(true))
        .field("email", email_field())
        .field("phone", FieldValidator::for_kind(FieldKind::Mobile).pattern())
        .field("subject", FieldValidator::text().required())
        .field(
            "message",
            FieldValidator::text().required().length(
                Some(config.contact.message_min_length),
                Some(config.contact.message_max_length),
            ),
        )
        .field("subscribe", FieldValidator::text())
        .field("reservationDate", FieldValidator::text())
        .field("reservationTime", FieldValidator::text())
        .field("partySize", FieldValidator::text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_names() {
        for name in FormName::ALL {
            assert_eq!(name.as_str().parse::<FormName>(), Ok(name));
            assert_eq!(name.spec(&FormsConfig::default()).name(), name.as_str());
        }
        assert_eq!("sign-in".parse::<FormName>(), Ok(FormName::Login));
        assert!("checkout".parse::<FormName>().is_err());
    }

    #[test]
    fn test_registration_layout() {
        let form = registration(&FormsConfig::default());
        let names: Vec<&str> = form.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "firstName",
                "middleName",
                "lastName",
                "mobile",
                "phone",
                "dob",
                "gender",
                "userType",
                "email",
                "password",
                "confirmPassword"
            ]
        );
        assert!(!form.get("middleName").unwrap().validator.is_required());
        assert!(!form.get("phone").unwrap().validator.is_required());
        assert_eq!(form.cross_field_rules().len(), 1);
    }

    #[test]
    fn test_login_uses_configured_length() {
        let mut config = FormsConfig::default();
        config.login.password_min_length = 4;
        let form = login(&config);
        let password = &form.get("password").unwrap().validator;
        assert!(password.validate("abcd").is_valid());
        assert!(!password.validate("abc").is_valid());
    }

    #[test]
    fn test_registration_password_rejects_spaces_via_pattern() {
        let form = registration(&FormsConfig::default());
        let password = &form.get("password").unwrap().validator;
        assert!(!password.rules().contains(&restro_forms_validation::Rule::NoSpaces));
        assert_eq!(
            password.validate("Secret 1!").reason(),
            Some(restro_forms_validation::Reason::PatternMismatch)
        );
    }
}
