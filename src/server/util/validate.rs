//! Field constraint checks for incoming view models.

use crate::server::error::validation::ValidationErrors;

/// Implemented by every payload that is validated before reaching a service.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Fluent collector of field rule violations.
///
/// Length rules count characters and only apply to present values; pair them
/// with `required` when the field must exist.
#[derive(Default)]
pub struct Rules {
    errors: ValidationErrors,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails when the value is absent or blank.
    pub fn required(mut self, field: &str, value: Option<&str>) -> Self {
        if value.map_or(true, |v| v.trim().is_empty()) {
            self.errors.add(field, format!("{} is required", field));
        }
        self
    }

    pub fn min_length(mut self, field: &str, value: Option<&str>, min: usize) -> Self {
        if let Some(v) = value {
            if v.chars().count() < min {
                self.errors.add(
                    field,
                    format!("{} must be at least {} characters", field, min),
                );
            }
        }
        self
    }

    pub fn max_length(mut self, field: &str, value: Option<&str>, max: usize) -> Self {
        if let Some(v) = value {
            if v.chars().count() > max {
                self.errors
                    .add(field, format!("{} must be at most {} characters", field, max));
            }
        }
        self
    }

    /// Records `message` against `field` unless `ok` holds.
    pub fn check(mut self, field: &str, ok: bool, message: &str) -> Self {
        if !ok {
            self.errors.add(field, message);
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        self.errors.into_result()
    }
}
