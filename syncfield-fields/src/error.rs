//! Error types for field definition

use std::sync::Arc;

use thiserror::Error;

/// Result type for fields operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// How loudly a failure is reported.
///
/// No failure here is fatal: every one of them means "this call had no
/// effect". Severity only picks the tracing level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Suspicious input that was rejected without being coerced
    Warning,
    /// The operation was ignored
    Error,
}

/// A draft that cannot be committed. Rules are checked in declaration order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field type is empty")]
    MissingType,

    #[error("field identifier is empty (type '{field_type}')")]
    MissingId { field_type: String },

    #[error("field identifier '{id}' contains characters outside [A-Za-z0-9-_@]")]
    InvalidId { id: String },

    #[error("field '{id}' has no name")]
    MissingName { id: String },

    #[error("field '{id}' has no description")]
    MissingDescription { id: String },
}

impl ValidationError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ValidationError::InvalidId { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Errors that can occur while defining fields
#[derive(Debug, Clone, Error)]
pub enum FieldsError {
    /// A draft mutator was called before `create`
    #[error("no field is being defined, call create() before {operation}()")]
    NoDraft { operation: &'static str },

    /// The draft failed validation and was discarded
    #[error("invalid field definition: {0}")]
    Invalid(#[from] ValidationError),

    /// Default language code shorter than two characters
    #[error("default language ISO code '{code}' is invalid")]
    InvalidDefaultLanguage { code: String },

    /// Field language code shorter than two characters
    #[error("language ISO code '{code}' is invalid")]
    InvalidLanguage { code: String },

    /// `multilang` on a type that is not text-like
    #[error("field type '{field_type}' cannot be multilingual")]
    LanguageNotSupported { field_type: String },

    /// `add_option` with an empty option name
    #[error("field option type cannot be empty")]
    EmptyOptionType,

    /// `publish` with nothing committed
    #[error("no fields were defined")]
    NoFields,

    /// Configuration could not be extracted
    #[error("configuration error: {0}")]
    Config(#[source] Arc<figment::Error>),
}

impl FieldsError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FieldsError::Invalid(err) => err.severity(),
            _ => ErrorSeverity::Error,
        }
    }
}

impl From<figment::Error> for FieldsError {
    fn from(error: figment::Error) -> Self {
        FieldsError::Config(Arc::new(error))
    }
}
