//! Field validation rules for the login forms.
//!
//! Rules are plain data — a field name, a predicate, and the message shown
//! when the predicate fails — rather than schema objects from a validation
//! framework. Each form checks its rules before any state transition is
//! attempted; a failing rule leaves the state machine untouched.

use serde::Serialize;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Exact length of a two-factor code.
pub const TWO_FACTOR_CODE_LEN: usize = 6;

/// One failed rule, addressed to a specific form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Stable field key the UI uses to place the message.
    pub field: &'static str,
    /// Human-readable message shown next to the field.
    pub message: &'static str,
}

/// A validation rule: field, predicate, and failure message.
pub struct Rule {
    pub field: &'static str,
    pub message: &'static str,
    check: fn(&str) -> bool,
}

impl Rule {
    /// Apply the rule, returning the error to surface when it fails.
    pub fn check(&self, value: &str) -> Option<FieldError> {
        if (self.check)(value) {
            None
        } else {
            Some(FieldError {
                field: self.field,
                message: self.message,
            })
        }
    }
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn long_enough(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LEN
}

fn exact_code_length(value: &str) -> bool {
    value.chars().count() == TWO_FACTOR_CODE_LEN
}

/// Identifier must be non-empty (whitespace does not count).
pub const IDENTIFIER: Rule = Rule {
    field: "identifier",
    message: "Please enter your username or email",
    check: present,
};

/// Password must be at least [`MIN_PASSWORD_LEN`] characters.
pub const PASSWORD: Rule = Rule {
    field: "password",
    message: "Password must be at least 6 characters",
    check: long_enough,
};

/// Two-factor code must be exactly [`TWO_FACTOR_CODE_LEN`] characters.
pub const TWO_FACTOR_CODE: Rule = Rule {
    field: "code",
    message: "Code must be exactly 6 characters",
    check: exact_code_length,
};

/// Collect the failures of a set of (rule, value) pairs.
fn run(checks: &[(&Rule, &str)]) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = checks
        .iter()
        .filter_map(|(rule, value)| rule.check(value))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the credentials form.
pub fn validate_credentials(identifier: &str, password: &str) -> Result<(), Vec<FieldError>> {
    run(&[(&IDENTIFIER, identifier), (&PASSWORD, password)])
}

/// Validate the two-factor form.
pub fn validate_two_factor(code: &str) -> Result<(), Vec<FieldError>> {
    run(&[(&TWO_FACTOR_CODE, code)])
}

/// Validate the reset / passwordless form (identifier only).
pub fn validate_identifier(identifier: &str) -> Result<(), Vec<FieldError>> {
    run(&[(&IDENTIFIER, identifier)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_credentials_pass() {
        assert!(validate_credentials("ada@example.com", "secret1").is_ok());
        // Exactly the minimum length is accepted.
        assert!(validate_credentials("ada", "123456").is_ok());
    }

    #[test]
    fn short_password_is_field_error() {
        let errors = validate_credentials("ada", "12345").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
        assert!(errors[0].message.contains("6 characters"));
    }

    #[test]
    fn blank_identifier_is_field_error() {
        let errors = validate_credentials("   ", "longenough").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "identifier");
    }

    #[test]
    fn both_fields_can_fail_at_once() {
        let errors = validate_credentials("", "abc").unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["identifier", "password"]);
    }

    #[test]
    fn two_factor_code_must_be_exactly_six() {
        assert!(validate_two_factor("123456").is_ok());
        assert!(validate_two_factor("abcdef").is_ok());
        assert!(validate_two_factor("12345").is_err());
        assert!(validate_two_factor("1234567").is_err());
        assert!(validate_two_factor("").is_err());
    }

    #[test]
    fn code_length_counts_characters_not_bytes() {
        // Six multi-byte characters are still six characters.
        assert!(validate_two_factor("éééééé").is_ok());
    }

    #[test]
    fn identifier_only_form() {
        assert!(validate_identifier("ada@example.com").is_ok());
        assert!(validate_identifier("").is_err());
    }
}
