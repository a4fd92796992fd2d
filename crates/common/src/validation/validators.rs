// Field Validators - Reusable validation components

/// Trait for field validators
pub trait FieldValidator<T> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// String validator
#[derive(Debug, Clone)]
pub struct StringValidator {
    not_empty: bool,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringValidator {
    /// Create a new string validator. Values are trimmed before checking.
    pub fn new() -> Self {
        Self { not_empty: false }
    }

    /// Require non-empty string
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

}

impl FieldValidator<String> for StringValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        if self.not_empty && value.trim().is_empty() {
            return Err("Value cannot be empty".to_string());
        }

        Ok(())
    }
}
