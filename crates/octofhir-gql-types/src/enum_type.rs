//! Enum type definitions and their coercion rules
//!
//! An [`EnumType`] owns an ordered, name-keyed set of [`EnumValue`]s and
//! converts between the two sides of each pair:
//! - Output coercion maps a resolver's internal value to its external name,
//!   considering only the values the request's warden allows
//! - Input validation checks an external name against the allowed values
//! - Input coercion maps an external name to its internal value over the
//!   full definition
//!
//! A type is mutable while the schema is being built and becomes read-only
//! once [`EnumType::seal`] is called.

use indexmap::IndexMap;
use octofhir_gql_diagnostics::{Diagnostic, GQL0004, GQL0100};
use serde_json::json;
use std::fmt;
use std::sync::Once;

use crate::enum_value::validate_name;
use crate::{
    AllowAll, EnumError, EnumResult, EnumValue, QueryContext, TypeKind, ValidationResult, Value,
    Warden,
};

static LEGACY_CONTEXT_NOTICE: Once = Once::new();

/// A closed set of named values
#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    name: String,
    description: Option<String>,
    values: IndexMap<String, EnumValue>,
    sealed: bool,
}

impl EnumType {
    /// Create an empty enum type
    pub fn new(name: impl Into<String>) -> EnumResult<Self> {
        Ok(Self {
            name: validate_name(name)?,
            description: None,
            values: IndexMap::new(),
            sealed: false,
        })
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add values in order, failing on the first duplicate name
    pub fn with_values(mut self, values: impl IntoIterator<Item = EnumValue>) -> EnumResult<Self> {
        for value in values {
            self.add_value(value)?;
        }
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub const fn kind(&self) -> TypeKind {
        TypeKind::Enum
    }

    /// All values keyed by name, in definition order
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    /// Look up a value by external name, ignoring visibility
    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    // === Definition ===

    /// Register one value.
    ///
    /// Fails if a value with the same name already exists or the type is
    /// sealed. The existing value is never overwritten.
    pub fn add_value(&mut self, value: EnumValue) -> EnumResult<()> {
        self.ensure_unsealed()?;
        insert_unique(&self.name, &mut self.values, value)
    }

    /// Replace the whole value set.
    ///
    /// The new set is built aside and swapped in only if every name is
    /// unique; on failure the previous values are left untouched.
    pub fn replace_values(
        &mut self,
        values: impl IntoIterator<Item = EnumValue>,
    ) -> EnumResult<()> {
        self.ensure_unsealed()?;

        let mut next = IndexMap::new();
        for value in values {
            insert_unique(&self.name, &mut next, value)?;
        }

        log::debug!(
            "replaced values of enum {}: {} -> {}",
            self.name,
            self.values.len(),
            next.len()
        );
        self.values = next;
        Ok(())
    }

    /// Freeze the value set for serving.
    ///
    /// Internal values shared by several names are reported through the
    /// logger; they remain accepted and resolve to the first visible match.
    pub fn seal(&mut self) {
        if self.sealed {
            return;
        }
        for warning in self.ambiguous_values() {
            log::warn!("{warning}");
        }
        self.sealed = true;
        log::debug!("sealed enum {} with {} values", self.name, self.values.len());
    }

    /// Deep, unsealed copy of this type. Changes to the copy never reach
    /// the original.
    pub fn copy(&self) -> Self {
        Self {
            sealed: false,
            ..self.clone()
        }
    }

    /// One warning per internal value that more than one name maps to
    pub fn ambiguous_values(&self) -> Vec<Diagnostic> {
        let entries: Vec<&EnumValue> = self.values.values().collect();
        let mut warnings = Vec::new();

        for (i, first) in entries.iter().enumerate() {
            if entries[..i].iter().any(|seen| seen.value() == first.value()) {
                continue;
            }
            let names: Vec<&str> = entries[i..]
                .iter()
                .filter(|other| other.value() == first.value())
                .map(|other| other.name())
                .collect();
            if names.len() > 1 {
                warnings.push(
                    Diagnostic::warning(
                        GQL0004,
                        format!(
                            "Enum {} maps {} to more than one name: {}",
                            self.name,
                            first.value(),
                            names.join(", ")
                        ),
                    )
                    .with_help(format!("{} is returned for this value", names[0])),
                );
            }
        }

        warnings
    }

    fn ensure_unsealed(&self) -> EnumResult<()> {
        if self.sealed {
            Err(EnumError::Sealed {
                type_name: self.name.clone(),
            })
        } else {
            Ok(())
        }
    }

    // === Coercion ===

    /// Map an internal value to the external name of the first visible
    /// value equal to it.
    ///
    /// Passing no context is a legacy form that considers every value; it
    /// logs a deprecation notice once per process.
    pub fn coerce_result(&self, value: &Value, ctx: Option<&QueryContext>) -> EnumResult<&str> {
        let visible = match ctx {
            Some(ctx) => ctx.warden().enum_values(self),
            None => {
                LEGACY_CONTEXT_NOTICE.call_once(|| {
                    log::warn!(
                        "coercing enum {} without a query context is deprecated; \
                         pass the request's QueryContext so visibility is applied",
                        self.name
                    );
                });
                AllowAll.enum_values(self)
            }
        };

        visible
            .into_iter()
            .find(|candidate| candidate.value() == value)
            .map(EnumValue::name)
            .ok_or_else(|| EnumError::UnresolvedValue {
                type_name: self.name.clone(),
                value: value.clone(),
            })
    }

    /// Check that `input` names a value the request may use
    pub fn validate_input(&self, input: &Value, ctx: &QueryContext) -> ValidationResult {
        let visible = ctx.warden().enum_values(self);
        let accepted = input
            .as_str()
            .is_some_and(|name| visible.iter().any(|candidate| candidate.name() == name));

        if accepted {
            return ValidationResult::valid();
        }

        let allowed: Vec<&str> = visible.iter().map(|candidate| candidate.name()).collect();
        ValidationResult::from(Diagnostic::error(
            GQL0100,
            format!("Expected {} to be one of: {}", input, allowed.join(", ")),
        ))
    }

    /// Map an external name to its internal value over the full definition.
    ///
    /// Returns `None` for unknown names and non-string input. Visibility is
    /// not consulted; run [`EnumType::validate_input`] first for request input.
    pub fn coerce_input(&self, input: &Value) -> Option<&Value> {
        input
            .as_str()
            .and_then(|name| self.values.get(name))
            .map(EnumValue::value)
    }

    // === Introspection ===

    /// Render this type as an introspection `__Type` object
    pub fn introspect(&self, ctx: &QueryContext, include_deprecated: bool) -> serde_json::Value {
        let enum_values: Vec<serde_json::Value> = ctx
            .warden()
            .enum_values(self)
            .into_iter()
            .filter(|value| include_deprecated || !value.is_deprecated())
            .map(|value| {
                json!({
                    "name": value.name(),
                    "description": value.description(),
                    "isDeprecated": value.is_deprecated(),
                    "deprecationReason": value.deprecation_reason(),
                })
            })
            .collect();

        json!({
            "kind": self.kind(),
            "name": self.name,
            "description": self.description,
            "enumValues": enum_values,
        })
    }
}

impl fmt::Display for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn insert_unique(
    type_name: &str,
    values: &mut IndexMap<String, EnumValue>,
    value: EnumValue,
) -> EnumResult<()> {
    if values.contains_key(value.name()) {
        return Err(EnumError::DuplicateName {
            type_name: type_name.to_string(),
            value_name: value.name().to_string(),
        });
    }
    values.insert(value.name().to_string(), value);
    Ok(())
}
