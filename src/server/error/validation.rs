use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ValidationErrorDto;

/// Field key used when the body itself could not be read.
pub const BODY_FIELD: &str = "body";

/// Collected field-level validation failures.
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("Validation failed for {} field(s)", errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error for a body that is not valid JSON for the expected shape.
    pub fn malformed(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(BODY_FIELD, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDto {
                error: "One or more validation errors occurred".to_string(),
                errors: self.errors,
            }),
        )
            .into_response()
    }
}
