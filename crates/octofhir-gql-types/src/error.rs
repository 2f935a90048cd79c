//! Errors raised by enum type definitions and result coercion

use octofhir_gql_diagnostics::{ErrorCode, GqlError, GQL0001, GQL0002, GQL0003, GQL0200};
use thiserror::Error;

use crate::Value;

/// Result type for enum operations
pub type EnumResult<T> = Result<T, EnumError>;

/// Enum definition and coercion errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnumError {
    /// A type or value name does not match the identifier rule
    #[error("Names must match /^[_a-zA-Z][_a-zA-Z0-9]*$/ but {name:?} does not")]
    InvalidName { name: String },

    /// Two values registered under one name
    #[error("Enum value names must be unique: {value_name} already exists on {type_name}")]
    DuplicateName {
        type_name: String,
        value_name: String,
    },

    /// Value set modified after the type was sealed
    #[error("{type_name} is sealed and its values can no longer be modified")]
    Sealed { type_name: String },

    /// No visible value maps back to the resolved internal value
    #[error("Can't resolve enum {type_name} for {value}")]
    UnresolvedValue { type_name: String, value: Value },
}

impl EnumError {
    /// Get the diagnostic code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidName { .. } => GQL0001,
            Self::DuplicateName { .. } => GQL0002,
            Self::Sealed { .. } => GQL0003,
            Self::UnresolvedValue { .. } => GQL0200,
        }
    }

    /// Check if this error was raised while defining a schema
    pub fn is_definition_error(&self) -> bool {
        self.code().is_definition_error()
    }
}

impl From<EnumError> for GqlError {
    fn from(err: EnumError) -> Self {
        let code = err.code();
        match &err {
            EnumError::UnresolvedValue { type_name, .. } => {
                GqlError::execution(code, err.to_string()).with_context(format!(
                    "a resolver returned a value with no visible {type_name} counterpart"
                ))
            }
            _ => GqlError::schema(code, err.to_string()),
        }
    }
}
