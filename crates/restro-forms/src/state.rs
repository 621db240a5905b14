// File: src/state.rs
// Purpose: Interaction state for a form being filled in

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use restro_forms_validation::ValidationOutcome;

use crate::form::{FormReport, FormSpec, FormValues};

/// Value and interaction flags for one field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    touched: bool,
    dirty: bool,
    outcome: ValidationOutcome,
}

impl FieldState {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Last evaluated outcome, with form-level errors taking precedence
    pub fn outcome(&self) -> &ValidationOutcome {
        &self.outcome
    }

    /// Errors are only shown once the user has interacted with the field
    pub fn should_display_error(&self) -> bool {
        !self.outcome.is_valid() && (self.dirty || self.touched)
    }
}

/// A form plus the state of each of its fields
#[derive(Debug, Clone)]
pub struct FormState {
    spec: FormSpec,
    fields: BTreeMap<String, FieldState>,
    report: FormReport,
    today: Option<NaiveDate>,
}

impl FormState {
    pub fn new(spec: FormSpec) -> Self {
        Self::build(spec, None)
    }

    /// Evaluates date rules against a fixed day instead of the local clock
    pub fn with_today(spec: FormSpec, today: NaiveDate) -> Self {
        Self::build(spec, Some(today))
    }

    fn build(spec: FormSpec, today: Option<NaiveDate>) -> Self {
        let fields = spec
            .fields()
            .iter()
            .map(|field| (field.name.clone(), FieldState::default()))
            .collect();

        let mut state = Self {
            spec,
            fields,
            report: FormReport::default(),
            today,
        };
        state.revalidate();
        state
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    pub fn report(&self) -> &FormReport {
        &self.report
    }

    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|(name, state)| (name.clone(), state.value.clone()))
            .collect()
    }

    /// Records a new value; returns false when the form has no such field
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        let Some(state) = self.fields.get_mut(name) else {
            return false;
        };
        state.value = value.into();
        state.dirty = true;
        self.revalidate();
        true
    }

    pub fn mark_touched(&mut self, name: &str) -> bool {
        match self.fields.get_mut(name) {
            Some(state) => {
                state.touched = true;
                true
            }
            None => false,
        }
    }

    /// Marks every field touched and returns the fresh report
    pub fn submit(&mut self) -> &FormReport {
        for state in self.fields.values_mut() {
            state.touched = true;
        }
        self.revalidate();
        &self.report
    }

    /// Message to render under a field right now; empty until it should be shown
    pub fn visible_message(&self, name: &str) -> String {
        match self.fields.get(name) {
            Some(state) if state.should_display_error() => self.report.message_for(name),
            _ => String::new(),
        }
    }

    /// Clears every value and flag
    pub fn reset(&mut self) {
        for state in self.fields.values_mut() {
            *state = FieldState::default();
        }
        self.revalidate();
    }

    fn revalidate(&mut self) {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        self.report = self.spec.validate_on(&self.values(), today);

        for (name, state) in self.fields.iter_mut() {
            state.outcome = self.report.effective_outcome(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormsConfig;
    use crate::forms::{login, registration};
    use restro_forms_validation::Reason;

    fn new_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_errors_hidden_until_interaction() {
        let state = FormState::with_today(login(&FormsConfig::default()), new_year());
        let email = state.field("email").unwrap();
        assert_eq!(email.outcome().reason(), Some(Reason::Required));
        assert!(!email.should_display_error());
        assert_eq!(state.visible_message("email"), "");
    }

    #[test]
    fn test_typing_marks_dirty() {
        let mut state = FormState::with_today(login(&FormsConfig::default()), new_year());
        assert!(state.set_value("email", "not-an-email"));
        assert!(state.field("email").unwrap().is_dirty());
        assert_eq!(state.visible_message("email"), "Please enter a valid email address.");

        assert!(state.set_value("email", "guest@restaurant.com"));
        assert_eq!(state.visible_message("email"), "");
        assert!(!state.set_value("nickname", "x"));
    }

    #[test]
    fn test_touch_without_typing() {
        let mut state = FormState::with_today(login(&FormsConfig::default()), new_year());
        assert!(state.mark_touched("password"));
        assert_eq!(state.visible_message("password"), "This field is required.");
    }

    #[test]
    fn test_password_change_revalidates_confirmation() {
        let mut state = FormState::with_today(registration(&FormsConfig::default()), new_year());
        state.set_value("password", "Secret1!");
        state.set_value("confirmPassword", "Secret1!");
        assert!(state.field("confirmPassword").unwrap().outcome().is_valid());

        state.set_value("password", "Secret2!");
        assert_eq!(
            state.visible_message("confirmPassword"),
            "Passwords do not match."
        );
    }

    #[test]
    fn test_submit_touches_everything() {
        let mut state = FormState::with_today(login(&FormsConfig::default()), new_year());
        let valid = state.submit().is_valid();
        assert!(!valid);
        assert!(state.field("email").unwrap().is_touched());
        assert_eq!(state.visible_message("password"), "This field is required.");

        state.reset();
        assert!(!state.field("email").unwrap().is_touched());
        assert_eq!(state.values().get("email").map(String::as_str), Some(""));
    }
}
