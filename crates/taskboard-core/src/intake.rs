//! Form intake
//!
//! Turns the three raw field strings a form hands over into a validated
//! [`ProjectDraft`], or rejects the submission as a whole. Rejection is a
//! normal outcome, not an error: the caller gets `None`, shows
//! [`ALERT_INVALID_INPUT`], and leaves the store untouched. All three
//! fields must pass or none of the input is recorded.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::FormConfig;
use crate::validation::{ValidationRule, is_input_valid};

/// The one user-facing rejection message, shared by every surface
pub const ALERT_INVALID_INPUT: &str = "Invalid input, try again!";

/// Raw field strings as collected by a form, unvalidated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProjectInput {
    pub title: String,
    pub people: String,
    pub description: String,
}

impl RawProjectInput {
    pub fn new(
        title: impl Into<String>,
        people: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            people: people.into(),
            description: description.into(),
        }
    }
}

/// Validated project input, ready for the store
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Validate raw form input against the configured field rules
///
/// Title must be non-empty, the description non-empty and at least the
/// configured minimum length, and people a whole number within the
/// configured bounds. An unparseable people field validates as NaN and is
/// rejected by the numeric bounds.
pub fn validate(input: &RawProjectInput, form: &FormConfig) -> Option<ProjectDraft> {
    let people: f64 = input.people.trim().parse().unwrap_or(f64::NAN);

    let title_valid = is_input_valid(&ValidationRule::text(input.title.as_str()).required());
    let description_valid = is_input_valid(
        &ValidationRule::text(input.description.as_str())
            .required()
            .min_length(form.description_min_length),
    );
    let people_valid = is_input_valid(
        &ValidationRule::number(people)
            .required()
            .min(form.people_min)
            .max(form.people_max),
    ) && people.fract() == 0.0;

    if !(title_valid && description_valid && people_valid) {
        debug!(
            title_valid,
            description_valid, people_valid, "form submission rejected"
        );
        return None;
    }

    Some(ProjectDraft {
        title: input.title.clone(),
        description: input.description.clone(),
        people: people as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormConfig {
        FormConfig::default()
    }

    #[test]
    fn test_valid_submission_is_accepted() {
        let input = RawProjectInput::new("Build API", "3", "Implement REST endpoints");
        let draft = validate(&input, &form()).unwrap();

        assert_eq!(draft.title, "Build API");
        assert_eq!(draft.people, 3);
        assert_eq!(draft.description, "Implement REST endpoints");
    }

    #[test]
    fn test_all_fields_must_pass_or_none_is_recorded() {
        let input = RawProjectInput::new("", "10", "x");
        assert!(validate(&input, &form()).is_none());
    }

    #[test]
    fn test_empty_title_rejected() {
        let input = RawProjectInput::new("   ", "3", "Long enough text");
        assert!(validate(&input, &form()).is_none());
    }

    #[test]
    fn test_short_description_rejected() {
        let input = RawProjectInput::new("T", "3", "abcd");
        assert!(validate(&input, &form()).is_none());

        let input = RawProjectInput::new("T", "3", "abcde");
        assert!(validate(&input, &form()).is_some());
    }

    #[test]
    fn test_people_bounds_are_inclusive() {
        for (people, expected) in [("0", false), ("1", true), ("5", true), ("6", false)] {
            let input = RawProjectInput::new("T", people, "Long enough text");
            assert_eq!(validate(&input, &form()).is_some(), expected, "people={people}");
        }
    }

    #[test]
    fn test_unparseable_people_rejected() {
        for people in ["", "  ", "abc", "3x"] {
            let input = RawProjectInput::new("T", people, "Long enough text");
            assert!(validate(&input, &form()).is_none(), "people={people:?}");
        }
    }

    #[test]
    fn test_fractional_people_rejected() {
        let input = RawProjectInput::new("T", "3.5", "Long enough text");
        assert!(validate(&input, &form()).is_none());
    }

    #[test]
    fn test_limits_come_from_config() {
        let mut form = form();
        form.people_max = 9.0;
        form.description_min_length = 2;

        let input = RawProjectInput::new("T", "8", "ok");
        assert!(validate(&input, &form).is_some());
    }
}
