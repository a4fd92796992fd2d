// Validation Module - field-level checks on caller input
use std::fmt;

mod validators;

pub use validators::{FieldValidator, StringValidator};

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error with detailed field-level errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create an empty error to accumulate field errors into
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validation error for a single field
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { errors: vec![FieldError::new(field, message)] }
    }

    /// Add a field error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Run `validator` against `value`, recording a failure under `field`
    pub fn check<T, V>(&mut self, field: &str, value: &T, validator: &V)
    where
        V: FieldValidator<T>,
    {
        if let Err(message) = validator.validate(value) {
            self.add_field_error(field, message);
        }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get errors for a specific field
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "Validation error with no specific field errors"),
            [single] => write!(f, "{}: {}", single.field, single.message),
            errors => {
                write!(f, "Validation failed with {} errors: ", errors.len())?;
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}: {}", error.field, error.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_error_converts_to_ok() {
        assert_eq!(ValidationError::new().into_result(), Ok(()));
    }

    #[test]
    fn check_records_failures_per_field() {
        let mut error = ValidationError::new();
        let required = StringValidator::new().not_empty();

        error.check("username", &"alice".to_string(), &required);
        error.check("password", &"   ".to_string(), &required);

        assert_eq!(error.errors.len(), 1);
        assert_eq!(error.field_errors("password").len(), 1);
        assert_eq!(error.to_string(), "password: Value cannot be empty");
    }

    #[test]
    fn display_lists_every_field() {
        let mut error = ValidationError::field("username", "Value cannot be empty");
        error.add_field_error("token", "Value cannot be empty");

        let rendered = error.to_string();
        assert!(rendered.starts_with("Validation failed with 2 errors"));
        assert!(rendered.contains("username: "));
        assert!(rendered.contains("token: "));
    }
}
