//! GraphQL schema types
//!
//! This crate defines schema-level type descriptors and their coercion rules:
//! - Enum types and their values
//! - Runtime values exchanged with resolvers
//! - Per-request visibility (wardens and query contexts)
//! - Input validation results

pub mod enum_type;
pub mod enum_value;
pub mod error;
pub mod kind;
pub mod validation;
pub mod value;
pub mod visibility;

pub use enum_type::EnumType;
pub use enum_value::{EnumValue, is_valid_name};
pub use error::{EnumError, EnumResult};
pub use kind::TypeKind;
pub use validation::ValidationResult;
pub use value::Value;
pub use visibility::{AllowAll, FilterWarden, HideDeprecated, QueryContext, Warden};
