//! Schema error types

use crate::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - the schema or the request cannot proceed
    Error,
    /// Warning - potential issue but can continue
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with its position in the input and optional help
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Path to the offending input (argument names, list indices)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            path: Vec::new(),
            help: None,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            path: Vec::new(),
            help: None,
        }
    }

    /// Set the input path
    pub fn with_path<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path = path.into_iter().map(Into::into).collect();
        self
    }

    /// Prefix the input path with an outer segment
    pub fn nested_in(mut self, segment: impl Into<String>) -> Self {
        self.path.insert(0, segment.into());
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if !self.path.is_empty() {
            write!(f, " at {}", self.path.join("."))?;
        }
        Ok(())
    }
}

/// Main schema error type
#[derive(Debug, Clone, Error)]
pub enum GqlError {
    /// Definition error (schema construction)
    #[error("{code}: {message}")]
    Schema {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// Execution error (result coercion)
    #[error("{code}: {message}")]
    Execution {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },
}

impl GqlError {
    /// Create a definition error
    pub fn schema(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Schema {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Create an execution error
    pub fn execution(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Execution {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Attach context to a definition or execution error
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        match &mut self {
            Self::Schema { context, .. } | Self::Execution { context, .. } => {
                *context = Some(ctx.into());
            }
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Schema { code, .. } | Self::Execution { code, .. } => *code,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::Schema { code, message, context }
            | Self::Execution { code, message, context } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                if let Some(ctx) = context {
                    diag = diag.with_help(ctx.clone());
                }
                diag
            }
        }
    }
}
