//! Per-request visibility of schema members
//!
//! A [`Warden`] decides which enum values a request may see. It is carried
//! by the [`QueryContext`] and consulted by output coercion, input validation
//! and introspection. The enum type never caches the warden's answer.

use std::fmt;
use std::sync::Arc;

use crate::{EnumType, EnumValue};

/// Visibility filter for a single request
pub trait Warden: Send + Sync {
    /// List the values of `enum_type` the request may see, in definition order
    fn enum_values<'t>(&self, enum_type: &'t EnumType) -> Vec<&'t EnumValue>;
}

/// Warden that shows every value
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl Warden for AllowAll {
    fn enum_values<'t>(&self, enum_type: &'t EnumType) -> Vec<&'t EnumValue> {
        enum_type.values().values().collect()
    }
}

/// Warden that hides deprecated values
#[derive(Debug, Clone, Copy, Default)]
pub struct HideDeprecated;

impl Warden for HideDeprecated {
    fn enum_values<'t>(&self, enum_type: &'t EnumType) -> Vec<&'t EnumValue> {
        enum_type
            .values()
            .values()
            .filter(|value| !value.is_deprecated())
            .collect()
    }
}

/// Warden backed by a predicate over `(type, value)`
pub struct FilterWarden<F> {
    predicate: F,
}

impl<F> FilterWarden<F>
where
    F: Fn(&EnumType, &EnumValue) -> bool + Send + Sync,
{
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> Warden for FilterWarden<F>
where
    F: Fn(&EnumType, &EnumValue) -> bool + Send + Sync,
{
    fn enum_values<'t>(&self, enum_type: &'t EnumType) -> Vec<&'t EnumValue> {
        enum_type
            .values()
            .values()
            .filter(|value| (self.predicate)(enum_type, *value))
            .collect()
    }
}

impl<F> fmt::Debug for FilterWarden<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterWarden").finish_non_exhaustive()
    }
}

/// Request context handed to coercion by the execution engine
#[derive(Clone)]
pub struct QueryContext {
    warden: Arc<dyn Warden>,
}

impl Default for QueryContext {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryContext {
    /// Create a context that sees every value
    pub fn new() -> Self {
        Self {
            warden: Arc::new(AllowAll),
        }
    }

    /// Replace the warden
    pub fn with_warden(mut self, warden: impl Warden + 'static) -> Self {
        self.warden = Arc::new(warden);
        self
    }

    /// Share an existing warden
    pub fn with_shared_warden(mut self, warden: Arc<dyn Warden>) -> Self {
        self.warden = warden;
        self
    }

    pub fn warden(&self) -> &dyn Warden {
        self.warden.as_ref()
    }
}

impl fmt::Debug for QueryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryContext").finish_non_exhaustive()
    }
}
