//! Declarative field validation
//!
//! A [`ValidationRule`] pairs one value with the constraints declared for
//! it; [`is_input_valid`] checks only the constraints that are present.
//! Constraints are type-conditional: length bounds apply to text values
//! only and numeric bounds to number values only, and a constraint whose
//! type does not match the value is skipped rather than treated as an
//! error. The check is total and side-effect free; combining several
//! fields' results is the caller's responsibility.

/// A value under validation: the form hands over either raw text or a
/// number parsed from it.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleValue {
    Text(String),
    Number(f64),
}

impl RuleValue {
    /// Stringified form, used by the `required` check. A number always
    /// stringifies non-empty, so `required` never rejects one.
    fn to_display(&self) -> String {
        match self {
            RuleValue::Text(s) => s.clone(),
            RuleValue::Number(n) => n.to_string(),
        }
    }
}

/// One value plus the optional constraints declared for it
#[derive(Debug, Clone)]
pub struct ValidationRule {
    value: RuleValue,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min: Option<f64>,
    max: Option<f64>,
}

impl ValidationRule {
    /// Rule over a text value with no constraints declared
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(RuleValue::Text(value.into()))
    }

    /// Rule over a numeric value with no constraints declared
    pub fn number(value: f64) -> Self {
        Self::new(RuleValue::Number(value))
    }

    fn new(value: RuleValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Require the trimmed stringified value to be non-empty
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Minimum raw (untrimmed) length, inclusive; text values only
    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    /// Maximum raw (untrimmed) length, inclusive; text values only
    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    /// Minimum value, inclusive; numeric values only
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Maximum value, inclusive; numeric values only
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Check a value against its declared constraints
///
/// Returns true iff every declared constraint passes. With no constraints
/// declared, every value is valid. Comparisons against a NaN number are
/// false, so a NaN fails any declared numeric bound.
pub fn is_input_valid(rule: &ValidationRule) -> bool {
    let mut is_valid = true;

    if rule.required {
        is_valid = is_valid && !rule.value.to_display().trim().is_empty();
    }

    if let RuleValue::Text(text) = &rule.value {
        if let Some(min_length) = rule.min_length {
            is_valid = is_valid && text.chars().count() >= min_length;
        }
        if let Some(max_length) = rule.max_length {
            is_valid = is_valid && text.chars().count() <= max_length;
        }
    }

    if let RuleValue::Number(number) = rule.value {
        if let Some(min) = rule.min {
            is_valid = is_valid && number >= min;
        }
        if let Some(max) = rule.max {
            is_valid = is_valid && number <= max;
        }
    }

    is_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_constraints_always_valid() {
        assert!(is_input_valid(&ValidationRule::text("")));
        assert!(is_input_valid(&ValidationRule::text("   ")));
        assert!(is_input_valid(&ValidationRule::number(f64::NAN)));
    }

    #[test]
    fn test_required_text() {
        assert!(!is_input_valid(&ValidationRule::text("").required()));
        assert!(!is_input_valid(&ValidationRule::text("   ").required()));
        assert!(is_input_valid(&ValidationRule::text("x").required()));
    }

    #[test]
    fn test_required_number_never_rejects() {
        // A number stringifies non-empty, zero and NaN included.
        assert!(is_input_valid(&ValidationRule::number(0.0).required()));
        assert!(is_input_valid(&ValidationRule::number(f64::NAN).required()));
    }

    #[test]
    fn test_min_length_boundary() {
        assert!(!is_input_valid(&ValidationRule::text("abcd").min_length(5)));
        assert!(is_input_valid(&ValidationRule::text("abcde").min_length(5)));
    }

    #[test]
    fn test_max_length_boundary() {
        assert!(is_input_valid(&ValidationRule::text("abc").max_length(3)));
        assert!(!is_input_valid(&ValidationRule::text("abcd").max_length(3)));
    }

    #[test]
    fn test_length_is_raw_not_trimmed() {
        // "  x  " has raw length 5; trimming would fail the bound.
        assert!(is_input_valid(&ValidationRule::text("  x  ").min_length(5)));
    }

    #[test]
    fn test_numeric_bounds_inclusive() {
        let rule = |n: f64| ValidationRule::number(n).min(1.0).max(5.0);
        assert!(!is_input_valid(&rule(0.0)));
        assert!(is_input_valid(&rule(1.0)));
        assert!(is_input_valid(&rule(5.0)));
        assert!(!is_input_valid(&rule(6.0)));
    }

    #[test]
    fn test_nan_fails_declared_bounds() {
        assert!(!is_input_valid(&ValidationRule::number(f64::NAN).min(1.0)));
        assert!(!is_input_valid(&ValidationRule::number(f64::NAN).max(5.0)));
    }

    #[test]
    fn test_numeric_bounds_skip_text_values() {
        // Bounds declared against a text value do not apply.
        assert!(is_input_valid(&ValidationRule::text("0").min(1.0).max(5.0)));
    }

    #[test]
    fn test_length_bounds_skip_numeric_values() {
        assert!(is_input_valid(&ValidationRule::number(7.0).min_length(5)));
    }

    #[test]
    fn test_constraints_combine_with_and() {
        let rule = ValidationRule::text("abc").required().min_length(5);
        assert!(!is_input_valid(&rule));
    }
}
