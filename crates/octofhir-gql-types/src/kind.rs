//! Type categories reported by introspection

use serde::{Deserialize, Serialize};
use std::fmt;

/// The `__TypeKind` of a schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    /// Leaf type with custom serialization
    Scalar,
    /// Object type with fields
    Object,
    /// Abstract type implemented by objects
    Interface,
    /// Abstract type listing possible objects
    Union,
    /// Closed set of named values
    Enum,
    /// Input object type
    InputObject,
    /// List wrapper
    List,
    /// Non-null wrapper
    NonNull,
}

impl TypeKind {
    /// Get the introspection name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
        }
    }

    /// Check if types of this kind may be used as argument types
    pub const fn is_input(&self) -> bool {
        matches!(
            self,
            Self::Scalar | Self::Enum | Self::InputObject | Self::List | Self::NonNull
        )
    }

    /// Check if types of this kind may be used as field types
    pub const fn is_output(&self) -> bool {
        !matches!(self, Self::InputObject)
    }

    /// Check if this kind wraps another type
    pub const fn is_wrapper(&self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }

    /// Check if this kind is a leaf (serialized directly)
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Scalar | Self::Enum)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_kind_is_input_and_output_leaf() {
        assert!(TypeKind::Enum.is_input());
        assert!(TypeKind::Enum.is_output());
        assert!(TypeKind::Enum.is_leaf());
        assert!(!TypeKind::Enum.is_wrapper());
    }

    #[test]
    fn test_kind_names_match_serde() {
        for kind in [TypeKind::Enum, TypeKind::InputObject, TypeKind::NonNull] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
        assert!(!TypeKind::InputObject.is_output());
    }
}
