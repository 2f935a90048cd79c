//! GraphQL schema diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the schema
//! type definitions, including error codes, diagnostic records and the
//! workspace-wide error type.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;
