use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A mandatory field is absent from a create body.
    #[error("Missing {0}")]
    Missing(&'static str),
    #[error("validation error: {0}")]
    Validation(String),
}
