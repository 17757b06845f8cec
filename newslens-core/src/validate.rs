//! Pre-submission input validation

use std::fmt;

/// Trimmed length below which input is rejected
pub const MIN_TEXT_CHARS: usize = 10;
/// Trimmed length above which input is rejected
pub const MAX_TEXT_CHARS: usize = 5000;

/// Validation failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    Required,
    TooShort,
    TooLong,
}

/// A (field, message) validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub kind: ValidationErrorKind,
    pub message: &'static str,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ValidationError {
    fn text(kind: ValidationErrorKind, message: &'static str) -> Self {
        Self {
            field: "text",
            kind,
            message,
        }
    }
}

/// Validate news text before submission.
///
/// Pure function. Checks run against the trimmed text, in priority order:
/// `Required`, then `TooShort`, then `TooLong`. At most one error is
/// produced today, but callers must handle any number.
pub fn validate(text: &str) -> Vec<ValidationError> {
    let trimmed = text.trim();
    let len = trimmed.chars().count();

    let mut errors = Vec::new();
    if trimmed.is_empty() {
        errors.push(ValidationError::text(
            ValidationErrorKind::Required,
            "News text is required",
        ));
    } else if len < MIN_TEXT_CHARS {
        errors.push(ValidationError::text(
            ValidationErrorKind::TooShort,
            "News text must be at least 10 characters long",
        ));
    } else if len > MAX_TEXT_CHARS {
        errors.push(ValidationError::text(
            ValidationErrorKind::TooLong,
            "News text must be less than 5000 characters",
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<ValidationErrorKind> {
        validate(text).iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_empty_is_required() {
        assert_eq!(kinds(""), [ValidationErrorKind::Required]);
    }

    #[test]
    fn test_whitespace_only_is_required() {
        assert_eq!(kinds("   \n\t  "), [ValidationErrorKind::Required]);
    }

    #[test]
    fn test_short_input_is_too_short() {
        assert_eq!(kinds("short"), [ValidationErrorKind::TooShort]);
        // 9 chars: one below the minimum
        assert_eq!(kinds("123456789"), [ValidationErrorKind::TooShort]);
    }

    #[test]
    fn test_short_error_message() {
        let errors = validate("short");
        assert_eq!(
            errors[0].message,
            "News text must be at least 10 characters long"
        );
        assert_eq!(errors[0].field, "text");
    }

    #[test]
    fn test_boundary_lengths_are_valid() {
        assert!(validate(&"a".repeat(10)).is_empty());
        assert!(validate(&"a".repeat(5000)).is_empty());
    }

    #[test]
    fn test_over_limit_is_too_long() {
        let text = "a".repeat(5001);
        let errors = validate(&text);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TooLong);
        assert_eq!(
            errors[0].message,
            "News text must be less than 5000 characters"
        );
    }

    #[test]
    fn test_length_counts_trimmed_chars() {
        // 8 content chars padded with whitespace: still too short
        assert_eq!(kinds("  12345678  "), [ValidationErrorKind::TooShort]);
        // Padding around a valid body does not push it over the limit
        let padded = format!("   {}   ", "a".repeat(5000));
        assert!(validate(&padded).is_empty());
    }

    #[test]
    fn test_multibyte_chars_count_once() {
        // 10 CJK chars are valid even though they are 30 bytes
        let text = "新闻内容测试文本十字";
        assert_eq!(text.chars().count(), 10);
        assert!(validate(text).is_empty());
    }
}
