// File: src/form.rs
// Purpose: Form specifications, cross-field rules and validation reports

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use restro_forms_validation::{
    message_for, validate_password_match, FieldKind, FieldValidator, ValidationOutcome,
};
use serde::Serialize;

/// Raw submitted values keyed by field name
pub type FormValues = BTreeMap<String, String>;

/// A named field and the validator attached to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: String,
    pub validator: FieldValidator,
}

impl FieldSpec {
    pub fn kind(&self) -> Option<FieldKind> {
        self.validator.kind()
    }
}

/// Validation that depends on more than one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum CrossFieldRule {
    PasswordsMatch { password: String, confirm: String },
}

impl CrossFieldRule {
    /// Form-level error key, as exposed to templates
    pub fn error_key(&self) -> &'static str {
        match self {
            CrossFieldRule::PasswordsMatch { .. } => "passwordMismatch",
        }
    }

    /// Field under which the form-level error is displayed
    pub fn target(&self) -> &str {
        match self {
            CrossFieldRule::PasswordsMatch { confirm, .. } => confirm,
        }
    }

    fn check(&self, values: &FormValues) -> ValidationOutcome {
        match self {
            CrossFieldRule::PasswordsMatch { password, confirm } => {
                validate_password_match(value_of(values, password), value_of(values, confirm))
            }
        }
    }
}

fn value_of<'a>(values: &'a FormValues, name: &str) -> &'a str {
    values.get(name).map(String::as_str).unwrap_or("")
}

/// A form: ordered fields plus cross-field rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSpec {
    name: String,
    fields: Vec<FieldSpec>,
    cross_field: Vec<CrossFieldRule>,
}

impl FormSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            cross_field: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, validator: FieldValidator) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            validator,
        });
        self
    }

    pub fn cross_field(mut self, rule: CrossFieldRule) -> Self {
        self.cross_field.push(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn cross_field_rules(&self) -> &[CrossFieldRule] {
        &self.cross_field
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Rejects submissions that carry fields this form does not declare
    pub fn check_known_fields(&self, values: &FormValues) -> Result<()> {
        let unknown: Vec<&str> = values
            .keys()
            .map(String::as_str)
            .filter(|key| self.get(key).is_none())
            .collect();

        if !unknown.is_empty() {
            bail!("Unknown fields for form '{}': {}", self.name, unknown.join(", "));
        }
        Ok(())
    }

    pub fn validate(&self, values: &FormValues) -> FormReport {
        self.validate_on(values, Local::now().date_naive())
    }

    /// Validates every field and cross-field rule as of `today`
    ///
    /// Missing values are treated as empty strings.
    pub fn validate_on(&self, values: &FormValues, today: NaiveDate) -> FormReport {
        let fields = self
            .fields
            .iter()
            .map(|field| {
                let outcome = field.validator.validate_on(value_of(values, &field.name), today);
                if let Some(reason) = outcome.reason() {
                    tracing::debug!(form = %self.name, field = %field.name, %reason, "field failed validation");
                }
                FieldReport {
                    name: field.name.clone(),
                    kind: field.kind(),
                    outcome,
                }
            })
            .collect();

        let form_errors = self
            .cross_field
            .iter()
            .filter_map(|rule| {
                let outcome = rule.check(values);
                if outcome.is_valid() {
                    return None;
                }
                tracing::debug!(form = %self.name, key = rule.error_key(), "cross-field rule failed");
                Some(FormLevelError {
                    key: rule.error_key(),
                    field: rule.target().to_string(),
                    outcome,
                })
            })
            .collect();

        FormReport {
            fields,
            form_errors,
        }
    }
}

/// Outcome for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub name: String,
    pub kind: Option<FieldKind>,
    pub outcome: ValidationOutcome,
}

/// A failed cross-field rule, displayed under `field`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormLevelError {
    pub key: &'static str,
    pub field: String,
    pub outcome: ValidationOutcome,
}

/// Result of validating a whole form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormReport {
    fields: Vec<FieldReport>,
    form_errors: Vec<FormLevelError>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.form_errors.is_empty() && self.fields.iter().all(|field| field.outcome.is_valid())
    }

    pub fn fields(&self) -> &[FieldReport] {
        &self.fields
    }

    pub fn form_errors(&self) -> &[FormLevelError] {
        &self.form_errors
    }

    pub fn field_outcome(&self, name: &str) -> Option<&ValidationOutcome> {
        self.field(name).map(|field| &field.outcome)
    }

    pub fn form_error_for(&self, name: &str) -> Option<&FormLevelError> {
        self.form_errors.iter().find(|error| error.field == name)
    }

    /// Outcome shown for a field: a form-level error first, then the field's own
    pub fn effective_outcome(&self, name: &str) -> ValidationOutcome {
        if let Some(error) = self.form_error_for(name) {
            return error.outcome.clone();
        }
        self.field_outcome(name).cloned().unwrap_or_default()
    }

    /// Display text for a field; empty when there is nothing to show
    pub fn message_for(&self, name: &str) -> String {
        if let Some(error) = self.form_error_for(name) {
            let kind = self.field(name).and_then(|field| field.kind);
            return render(kind, &error.outcome);
        }

        match self.field(name) {
            Some(field) => render(field.kind, &field.outcome),
            None => String::new(),
        }
    }

    /// Every field with something to display, in declaration order
    pub fn messages(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|field| (field.name.clone(), self.message_for(&field.name)))
            .filter(|(_, message)| !message.is_empty())
            .collect()
    }

    /// All failures grouped by field name, form-level errors first
    pub fn errors(&self) -> BTreeMap<String, Vec<String>> {
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for error in &self.form_errors {
            let kind = self.field(&error.field).and_then(|field| field.kind);
            errors
                .entry(error.field.clone())
                .or_default()
                .push(render(kind, &error.outcome));
        }

        for field in &self.fields {
            if !field.outcome.is_valid() {
                errors
                    .entry(field.name.clone())
                    .or_default()
                    .push(render(field.kind, &field.outcome));
            }
        }

        errors
    }

    fn field(&self, name: &str) -> Option<&FieldReport> {
        self.fields.iter().find(|field| field.name == name)
    }
}

fn render(kind: Option<FieldKind>, outcome: &ValidationOutcome) -> String {
    match kind {
        Some(kind) => message_for(kind, outcome),
        None => match outcome {
            ValidationOutcome::Valid => String::new(),
            ValidationOutcome::Invalid { reason, params } => {
                restro_forms_validation::resolve(*reason, params)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restro_forms_validation::Reason;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn signup() -> FormSpec {
        FormSpec::new("signup")
            .field(
                "password",
                FieldValidator::for_kind(FieldKind::Password).required().min_length(8),
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

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_form_level_error_takes_precedence() {
        let report = signup().validate_on(&values(&[("password", "Secret1!")]), today());

        assert_eq!(
            report.field_outcome("confirmPassword").and_then(|o| o.reason()),
            Some(Reason::Required)
        );
        assert_eq!(report.message_for("confirmPassword"), "Passwords do not match.");
        assert_eq!(
            report.effective_outcome("confirmPassword").reason(),
            Some(Reason::PasswordsDoNotMatch)
        );
        assert_eq!(
            report.errors().get("confirmPassword").unwrap(),
            &vec!["Passwords do not match.".to_string(), "This field is required.".to_string()]
        );
    }

    #[test]
    fn test_matching_passwords_are_valid() {
        let report = signup().validate_on(
            &values(&[("password", "Secret1!"), ("confirmPassword", "Secret1!")]),
            today(),
        );
        assert!(report.is_valid());
        assert!(report.messages().is_empty());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn test_unknown_field_has_no_message() {
        let report = signup().validate_on(&FormValues::new(), today());
        assert_eq!(report.message_for("nickname"), "");
        assert!(report.field_outcome("nickname").is_none());
    }

    #[test]
    fn test_check_known_fields() {
        let form = signup();
        assert!(form.check_known_fields(&values(&[("password", "x")])).is_ok());

        let err = form
            .check_known_fields(&values(&[("password", "x"), ("nickname", "y")]))
            .unwrap_err();
        assert!(err.to_string().contains("nickname"));
    }
}
