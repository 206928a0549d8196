use thiserror::Error;

/// Errors from request body validation.
///
/// Each variant carries the offending field name so the HTTP layer can
/// build a per-field error map. Validation failures are client-caused and
/// are neither logged nor retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The {field} field is required.")]
    Missing { field: &'static str },

    #[error("The {field} field must be a string.")]
    NotAString { field: &'static str },

    #[error("The {field} field cannot be empty.")]
    Empty { field: &'static str },

    #[error("The {field} field must not exceed {max} characters.")]
    TooLong { field: &'static str, max: usize },
}

impl ValidationError {
    /// The name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing { field }
            | ValidationError::NotAString { field }
            | ValidationError::Empty { field }
            | ValidationError::TooLong { field, .. } => field,
        }
    }
}
