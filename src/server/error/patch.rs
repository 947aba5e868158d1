use thiserror::Error;

/// Failures while applying a JSON Patch document.
#[derive(Error, Debug, PartialEq)]
pub enum PatchError {
    #[error("Invalid JSON pointer '{0}'")]
    InvalidPointer(String),

    #[error("Path '{0}' does not exist")]
    PathNotFound(String),

    #[error("Test operation failed at '{0}'")]
    TestFailed(String),

    #[error("Cannot move '{from}' into its own child '{path}'")]
    MoveIntoChild { from: String, path: String },
}
