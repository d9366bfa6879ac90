//! Field-level input validation.
//!
//! # Responsibility
//! - Check one field value against its declared rules.
//! - Stay pure: no logging, no state, built fresh per call.
//!
//! # Invariants
//! - Every rule that applies to the value must pass (conjunction); a rule
//!   checked later can never mask an earlier failure.
//! - Length rules apply to text values only, range rules to numbers only.

/// A single field value under validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

/// Rules for one field, built per validation call and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSpec<'a> {
    pub value: FieldValue<'a>,
    pub required: bool,
    /// Minimum character count; text values only.
    pub min_length: Option<usize>,
    /// Maximum character count; text values only.
    pub max_length: Option<usize>,
    /// Inclusive lower bound; numeric values only.
    pub min: Option<i64>,
    /// Inclusive upper bound; numeric values only.
    pub max: Option<i64>,
}

impl<'a> ValidationSpec<'a> {
    /// Spec for a text field with no rules attached yet.
    pub fn text(value: &'a str) -> Self {
        Self {
            value: FieldValue::Text(value),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Spec for a numeric field with no rules attached yet.
    pub fn number(value: i64) -> Self {
        Self {
            value: FieldValue::Number(value),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    pub fn min(mut self, bound: i64) -> Self {
        self.min = Some(bound);
        self
    }

    pub fn max(mut self, bound: i64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// Checks a field value against every applicable rule.
///
/// Returns `true` only when all applicable rules hold. A spec with no
/// applicable rules is vacuously valid.
pub fn validate(spec: &ValidationSpec<'_>) -> bool {
    if spec.required && !required_holds(spec.value) {
        return false;
    }

    match spec.value {
        FieldValue::Text(text) => {
            let length = text.chars().count();
            if let Some(min_length) = spec.min_length {
                if length < min_length {
                    return false;
                }
            }
            if let Some(max_length) = spec.max_length {
                if length > max_length {
                    return false;
                }
            }
        }
        FieldValue::Number(number) => {
            if let Some(min) = spec.min {
                if number < min {
                    return false;
                }
            }
            if let Some(max) = spec.max {
                if number > max {
                    return false;
                }
            }
        }
    }

    true
}

fn required_holds(value: FieldValue<'_>) -> bool {
    match value {
        FieldValue::Text(text) => !text.trim().is_empty(),
        // Numbers always stringify to something non-empty, including 0.
        FieldValue::Number(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::{validate, ValidationSpec};

    #[test]
    fn required_text_rejects_blank_values() {
        assert!(!validate(&ValidationSpec::text("").required()));
        assert!(!validate(&ValidationSpec::text("   ").required()));
        assert!(validate(&ValidationSpec::text("x").required()));
    }

    #[test]
    fn required_number_always_holds() {
        assert!(validate(&ValidationSpec::number(0).required()));
        assert!(validate(&ValidationSpec::number(-3).required()));
    }

    #[test]
    fn min_length_bounds_text() {
        assert!(!validate(&ValidationSpec::text("ab").required().min_length(3)));
        assert!(validate(&ValidationSpec::text("abcd").required().min_length(3)));
    }

    #[test]
    fn max_length_bounds_text() {
        assert!(validate(&ValidationSpec::text("abc").max_length(3)));
        assert!(!validate(&ValidationSpec::text("abcd").max_length(3)));
    }

    #[test]
    fn numeric_range_checks_both_bounds() {
        let in_range = ValidationSpec::number(3).required().min(1).max(5);
        assert!(validate(&in_range));

        assert!(!validate(&ValidationSpec::number(0).required().min(1).max(5)));
        assert!(!validate(&ValidationSpec::number(6).required().min(1).max(5)));
    }

    #[test]
    fn single_sided_numeric_bounds_apply() {
        assert!(validate(&ValidationSpec::number(10).min(1)));
        assert!(!validate(&ValidationSpec::number(0).min(1)));
        assert!(validate(&ValidationSpec::number(4).max(5)));
        assert!(!validate(&ValidationSpec::number(7).max(5)));
    }

    #[test]
    fn whitespace_only_required_text_fails_even_when_long_enough() {
        // Three spaces satisfy min_length(3) but not the required rule;
        // the required failure must not be masked by the later rule.
        let spec = ValidationSpec::text("   ").required().min_length(3);
        assert!(!validate(&spec));
    }

    #[test]
    fn spec_with_no_rules_is_vacuously_valid() {
        assert!(validate(&ValidationSpec::text("")));
        assert!(validate(&ValidationSpec::number(42)));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate(&ValidationSpec::text("héllo").min_length(5)));
        assert!(validate(&ValidationSpec::text("héllo").max_length(5)));
    }
}
