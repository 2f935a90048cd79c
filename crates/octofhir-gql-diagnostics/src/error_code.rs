//! Schema error codes following a structured numbering system
//!
//! Error code ranges:
//! - GQL0001-GQL0099: Definition errors (raised while building a schema)
//! - GQL0100-GQL0199: Input validation problems (reported, not raised)
//! - GQL0200-GQL0299: Execution errors (raised while coercing results)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a definition error (0001-0099)
    pub const fn is_definition_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a validation problem (0100-0199)
    pub const fn is_validation_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is an execution error (0200-0299)
    pub const fn is_execution_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GQL{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Definition errors (0001-0099)
    map.insert(1, ErrorInfo::new("Invalid name")
        .with_help("Names must match /^[_a-zA-Z][_a-zA-Z0-9]*$/"));
    map.insert(2, ErrorInfo::new("Duplicate enum value name"));
    map.insert(3, ErrorInfo::new("Type is sealed")
        .with_help("Use `copy()` to derive a new definition from a sealed type"));
    map.insert(4, ErrorInfo::new("Ambiguous enum value")
        .with_help("Output coercion picks the first visible match"));

    // Validation problems (0100-0199)
    map.insert(100, ErrorInfo::new("Invalid enum value"));

    // Execution errors (0200-0299)
    map.insert(200, ErrorInfo::new("Unresolved enum value")
        .with_help("The resolver returned a value that no visible enum value maps to"));

    map
});

// Definition errors
pub const GQL0001: ErrorCode = ErrorCode::new(1);
pub const GQL0002: ErrorCode = ErrorCode::new(2);
pub const GQL0003: ErrorCode = ErrorCode::new(3);
pub const GQL0004: ErrorCode = ErrorCode::new(4);

// Validation problems
pub const GQL0100: ErrorCode = ErrorCode::new(100);

// Execution errors
pub const GQL0200: ErrorCode = ErrorCode::new(200);
