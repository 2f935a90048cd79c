//! A single named entry of an enum type

use regex::Regex;
use std::sync::LazyLock;

use crate::{EnumError, EnumResult, Value};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[_a-zA-Z][_a-zA-Z0-9]*$").expect("name pattern compiles"));

/// Check a type or value name against the identifier rule
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Validate a name, returning it owned on success
pub(crate) fn validate_name(name: impl Into<String>) -> EnumResult<String> {
    let name = name.into();
    if is_valid_name(&name) {
        Ok(name)
    } else {
        Err(EnumError::InvalidName { name })
    }
}

/// One value of an enum type.
///
/// Pairs the external name sent over the wire with the internal value the
/// application works with. The internal value defaults to the name itself.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    name: String,
    description: Option<String>,
    deprecation_reason: Option<String>,
    value: Value,
}

impl EnumValue {
    /// Create a value whose internal value is its own name
    pub fn new(name: impl Into<String>) -> EnumResult<Self> {
        let name = validate_name(name)?;
        Ok(Self {
            value: Value::String(name.clone()),
            name,
            description: None,
            deprecation_reason: None,
        })
    }

    /// Create a value with an explicit internal value
    pub fn with_internal(name: impl Into<String>, value: impl Into<Value>) -> EnumResult<Self> {
        Ok(Self::new(name)?.with_value(value))
    }

    /// Set the internal value
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the value as deprecated
    pub fn with_deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    /// Rename the value. The internal value is left as it was.
    pub fn set_name(&mut self, name: impl Into<String>) -> EnumResult<()> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    /// Deprecated values stay in the value set; only a warden may hide them
    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
