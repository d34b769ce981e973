use thiserror::Error;

/// Failures surfaced by the core.
///
/// Only the two required fields reject; every other absent or partial
/// input falls back to a documented default instead of erroring.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid input: missing required field {field}")]
    InvalidInput { field: &'static str },
}
