//! Date-of-birth validation
//!
//! Values arrive from the date picker as `YYYY-MM-DD`. Checks run in a fixed
//! order and stop at the first failure:
//!
//! 1. empty input is `required`
//! 2. anything other than three digit components is `invalid-date`
//! 3. years below 100 and components that do not name a real calendar day
//!    are `invalid-date`
//! 4. days after today are `future-date`
//! 5. years before the configured minimum are `year-out-of-range`
//! 6. people younger than the minimum age are `under-age`
//!
//! Only calendar dates are compared, so the time of day never matters.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::outcome::{Reason, ValidationOutcome, MIN_AGE, MIN_YEAR};

/// Parameters for the date-of-birth check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DobRule {
    #[serde(default = "default_min_age_years")]
    pub min_age_years: u32,

    #[serde(default = "default_min_year")]
    pub min_year: i32,
}

fn default_min_age_years() -> u32 {
    18
}

fn default_min_year() -> i32 {
    1900
}

impl Default for DobRule {
    fn default() -> Self {
        Self {
            min_age_years: default_min_age_years(),
            min_year: default_min_year(),
        }
    }
}

/// Validates a date of birth against the local calendar date
pub fn validate_date_of_birth(value: &str, rule: &DobRule) -> ValidationOutcome {
    validate_date_of_birth_on(value, rule, Local::now().date_naive())
}

/// Validates a date of birth as of `today`
pub fn validate_date_of_birth_on(value: &str, rule: &DobRule, today: NaiveDate) -> ValidationOutcome {
    let value = value.trim();
    if value.is_empty() {
        return ValidationOutcome::invalid(Reason::Required);
    }

    let Some((year, month, day)) = split_components(value) else {
        tracing::trace!(value, "date of birth is not three numeric components");
        return ValidationOutcome::invalid(Reason::InvalidDate);
    };

    // Years 0-99 do not round-trip through the browser's Date, so they are malformed
    if year < 100 {
        return ValidationOutcome::invalid(Reason::InvalidDate);
    }

    // from_ymd_opt refuses to roll over, so 2023-02-30 is rejected here
    let Some(dob) = NaiveDate::from_ymd_opt(year, month, day) else {
        return ValidationOutcome::invalid(Reason::InvalidDate);
    };

    if dob > today {
        return ValidationOutcome::invalid(Reason::FutureDate);
    }

    if year < rule.min_year {
        return ValidationOutcome::invalid_with(Reason::YearOutOfRange, MIN_YEAR, rule.min_year);
    }

    if age_on(dob, today) < i64::from(rule.min_age_years) {
        return ValidationOutcome::invalid_with(Reason::UnderAge, MIN_AGE, rule.min_age_years);
    }

    ValidationOutcome::Valid
}

/// Whole years between `dob` and `today`
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i64 {
    let mut age = i64::from(today.year()) - i64::from(dob.year());
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

fn split_components(value: &str) -> Option<(i32, u32, u32)> {
    let parts: Vec<&str> = value.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return None;
    };

    Some((parse_digits(year)?, parse_digits(month)?, parse_digits(day)?))
}

fn parse_digits<T: std::str::FromStr>(part: &str) -> Option<T> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
