use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A single JSON Patch (RFC 6902) operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperationDto {
    Add {
        path: String,
        #[schema(value_type = Object)]
        value: Value,
    },
    Remove {
        path: String,
    },
    Replace {
        path: String,
        #[schema(value_type = Object)]
        value: Value,
    },
    Move {
        from: String,
        path: String,
    },
    Copy {
        from: String,
        path: String,
    },
    Test {
        path: String,
        #[schema(value_type = Object)]
        value: Value,
    },
}
