use serde::de::DeserializeOwned;

use crate::server::error::validation::ValidationErrors;

/// Parses a JSON request body.
///
/// Handlers take the raw body so access checks run before the payload is looked at.
/// An empty body or JSON of the wrong shape is a validation failure on the body.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ValidationErrors> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationErrors::malformed("A non-empty request body is required"));
    }

    serde_json::from_slice(body).map_err(|e| ValidationErrors::malformed(e.to_string()))
}
