//! Rule descriptors and the field validator that evaluates them
//!
//! A field carries a list of [`Rule`]s. However they were declared, they are
//! evaluated required → length → pattern → specialized, and the first failure
//! is reported. An empty value that passed (or had no) `required` check skips
//! everything else.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date::{validate_date_of_birth_on, DobRule};
use crate::kind::FieldKind;
use crate::outcome::ValidationOutcome;
use crate::string::{validate_length, validate_no_spaces, validate_pattern, validate_required};

/// A single validation rule attached to a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum Rule {
    Required,
    Length {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
    },
    /// Full match against the registry pattern of the field's kind
    Pattern,
    NoSpaces,
    DateOfBirth(DobRule),
}

impl Rule {
    fn stage(&self) -> u8 {
        match self {
            Rule::Required => 0,
            Rule::Length { .. } => 1,
            Rule::Pattern => 2,
            Rule::NoSpaces | Rule::DateOfBirth(_) => 3,
        }
    }

    fn check(&self, kind: Option<FieldKind>, value: &str, today: NaiveDate) -> ValidationOutcome {
        match self {
            Rule::Required => validate_required(value),
            Rule::Length { min, max } => validate_length(value, *min, *max),
            Rule::Pattern => match kind {
                Some(kind) => validate_pattern(kind, value),
                None => ValidationOutcome::Valid,
            },
            Rule::NoSpaces => validate_no_spaces(value),
            Rule::DateOfBirth(rule) => validate_date_of_birth_on(value, rule, today),
        }
    }
}

/// Validator attached to one field: its kind plus the rules that apply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValidator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kind: Option<FieldKind>,
    rules: Vec<Rule>,
}

impl FieldValidator {
    pub fn new(kind: Option<FieldKind>) -> Self {
        Self {
            kind,
            rules: Vec::new(),
        }
    }

    pub fn for_kind(kind: FieldKind) -> Self {
        Self::new(Some(kind))
    }

    /// A validator for free-text fields with no registry pattern
    pub fn text() -> Self {
        Self::new(None)
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn required(self) -> Self {
        self.rule(Rule::Required)
    }

    pub fn length(self, min: Option<usize>, max: Option<usize>) -> Self {
        self.rule(Rule::Length { min, max })
    }

    pub fn min_length(self, min: usize) -> Self {
        self.length(Some(min), None)
    }

    pub fn pattern(self) -> Self {
        self.rule(Rule::Pattern)
    }

    pub fn no_spaces(self) -> Self {
        self.rule(Rule::NoSpaces)
    }

    pub fn date_of_birth(self, rule: DobRule) -> Self {
        self.rule(Rule::DateOfBirth(rule))
    }

    pub fn kind(&self) -> Option<FieldKind> {
        self.kind
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }

    pub fn validate(&self, value: &str) -> ValidationOutcome {
        self.validate_on(value, Local::now().date_naive())
    }

    /// Evaluates every rule as of `today`, returning the first failure
    pub fn validate_on(&self, value: &str, today: NaiveDate) -> ValidationOutcome {
        let mut ordered: Vec<&Rule> = self.rules.iter().collect();
        ordered.sort_by_key(|rule| rule.stage());

        for rule in ordered {
            if value.is_empty() && *rule != Rule::Required {
                break;
            }

            // A blank optional date is left alone; a required one already failed above
            if matches!(rule, Rule::DateOfBirth(_)) && value.trim().is_empty() {
                continue;
            }

            let outcome = rule.check(self.kind, value, today);
            if !outcome.is_valid() {
                return outcome;
            }
        }

        ValidationOutcome::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Reason;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_required_wins_over_pattern() {
        let validator = FieldValidator::for_kind(FieldKind::Mobile).pattern().required();
        assert_eq!(validator.validate_on("", today()).reason(), Some(Reason::Required));
    }

    #[test]
    fn test_optional_empty_value_skips_checks() {
        let validator = FieldValidator::for_kind(FieldKind::Mobile).min_length(10).pattern();
        assert!(validator.validate_on("", today()).is_valid());
    }

    #[test]
    fn test_length_before_pattern() {
        let validator = FieldValidator::for_kind(FieldKind::Password)
            .pattern()
            .min_length(8)
            .required();
        let outcome = validator.validate_on("abc", today());
        assert_eq!(outcome.reason(), Some(Reason::TooShort));
    }

    #[test]
    fn test_pattern_before_specialized() {
        let validator = FieldValidator::for_kind(FieldKind::Password)
            .no_spaces()
            .pattern()
            .required();
        assert_eq!(
            validator.validate_on("Secret 1!", today()).reason(),
            Some(Reason::PatternMismatch)
        );

        let spaces_only = FieldValidator::text().no_spaces();
        assert_eq!(
            spaces_only.validate_on("a b", today()).reason(),
            Some(Reason::CannotContainSpace)
        );
    }

    #[test]
    fn test_date_of_birth_rule() {
        let validator = FieldValidator::for_kind(FieldKind::DateOfBirth)
            .required()
            .date_of_birth(DobRule::default());
        assert!(validator.validate_on("2006-01-01", today()).is_valid());
        assert_eq!(
            validator.validate_on("2006-01-02", today()).reason(),
            Some(Reason::UnderAge)
        );
        assert_eq!(validator.validate_on("", today()).reason(), Some(Reason::Required));
    }

    #[test]
    fn test_blank_optional_date_of_birth_is_valid() {
        let validator =
            FieldValidator::for_kind(FieldKind::DateOfBirth).date_of_birth(DobRule::default());
        assert!(validator.validate_on("", today()).is_valid());
        assert!(validator.validate_on("   ", today()).is_valid());
        assert_eq!(
            validator.validate_on("2006-01-02", today()).reason(),
            Some(Reason::UnderAge)
        );

        let required = validator.required();
        assert_eq!(required.validate_on("   ", today()).reason(), Some(Reason::Required));
    }

    #[test]
    fn test_pattern_on_untyped_field_is_noop() {
        let validator = FieldValidator::text().required().pattern();
        assert!(validator.validate_on("anything #1", today()).is_valid());
    }

    #[test]
    fn test_idempotent() {
        let validator = FieldValidator::for_kind(FieldKind::Email).required().pattern();
        for value in ["", "guest@restaurant.com", "not-an-email"] {
            assert_eq!(
                validator.validate_on(value, today()),
                validator.validate_on(value, today())
            );
        }
    }

    #[test]
    fn test_rules_serialize_as_tagged_descriptors() {
        let validator = FieldValidator::for_kind(FieldKind::Password)
            .required()
            .length(Some(8), None)
            .date_of_birth(DobRule::default());
        let json = serde_json::to_value(validator.rules()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"rule": "required"},
                {"rule": "length", "min": 8},
                {"rule": "dateOfBirth", "min_age_years": 18, "min_year": 1900}
            ])
        );
    }
}
