//! Visibility tests
//!
//! Wardens restrict which values a request may see. Output coercion and
//! validation honour them; input coercion does not.

use octofhir_gql_types::{
    AllowAll, EnumType, EnumValue, FilterWarden, HideDeprecated, QueryContext, Value, Warden,
};
use std::sync::Arc;

fn color() -> EnumType {
    EnumType::new("Color")
        .unwrap()
        .with_values([
            EnumValue::with_internal("RED", 0).unwrap(),
            EnumValue::with_internal("GREEN", 1).unwrap(),
            EnumValue::with_internal("BLUE", 2)
                .unwrap()
                .with_deprecation_reason("Out of stock"),
        ])
        .unwrap()
}

fn hide_blue() -> QueryContext {
    QueryContext::new().with_warden(FilterWarden::new(|_: &EnumType, value: &EnumValue| {
        value.name() != "BLUE"
    }))
}

#[test]
fn test_hidden_value_fails_validation_but_still_coerces() {
    let ty = color();
    let ctx = hide_blue();

    let result = ty.validate_input(&Value::from("BLUE"), &ctx);
    assert!(!result.is_valid());
    assert_eq!(result.messages(), vec!["Expected \"BLUE\" to be one of: RED, GREEN"]);

    assert_eq!(ty.coerce_input(&Value::from("BLUE")), Some(&Value::from(2)));
}

#[test]
fn test_hidden_value_is_unresolved_on_output() {
    let ty = color();
    assert!(ty.coerce_result(&Value::from(2), Some(&hide_blue())).is_err());
    assert_eq!(ty.coerce_result(&Value::from(2), Some(&QueryContext::new())).unwrap(), "BLUE");
}

#[test]
fn test_first_visible_match_wins() {
    let ty = EnumType::new("Size")
        .unwrap()
        .with_values([
            EnumValue::with_internal("SMALL", 1).unwrap(),
            EnumValue::with_internal("TINY", 1).unwrap(),
        ])
        .unwrap();
    let ctx = QueryContext::new()
        .with_warden(FilterWarden::new(|_: &EnumType, value: &EnumValue| value.name() != "SMALL"));

    assert_eq!(ty.coerce_result(&Value::from(1), Some(&ctx)).unwrap(), "TINY");
}

#[test]
fn test_deprecated_values_stay_unless_hidden() {
    let ty = color();

    let open = QueryContext::new();
    assert!(ty.validate_input(&Value::from("BLUE"), &open).is_valid());

    let strict = QueryContext::new().with_warden(HideDeprecated);
    assert!(!ty.validate_input(&Value::from("BLUE"), &strict).is_valid());
    assert_eq!(ty.len(), 3);
}

#[test]
fn test_introspection_respects_warden() {
    let ty = color();
    let json = ty.introspect(&hide_blue(), true);
    let names: Vec<&str> = json["enumValues"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v["name"].as_str())
        .collect();
    assert_eq!(names, vec!["RED", "GREEN"]);
}

#[test]
fn test_custom_warden_per_viewer() {
    struct ByRole {
        admin: bool,
    }

    impl Warden for ByRole {
        fn enum_values<'t>(&self, enum_type: &'t EnumType) -> Vec<&'t EnumValue> {
            enum_type
                .values()
                .values()
                .filter(|value| self.admin || !value.is_deprecated())
                .collect()
        }
    }

    let ty = color();
    let shared: Arc<dyn Warden> = Arc::new(ByRole { admin: true });
    let admin = QueryContext::new().with_shared_warden(Arc::clone(&shared));
    let viewer = QueryContext::new().with_warden(ByRole { admin: false });

    assert!(ty.validate_input(&Value::from("BLUE"), &admin).is_valid());
    assert!(!ty.validate_input(&Value::from("BLUE"), &viewer).is_valid());
    assert_eq!(ty.coerce_result(&Value::from(2), Some(&admin)).unwrap(), "BLUE");
    assert!(ty.coerce_result(&Value::from(2), Some(&viewer)).is_err());
}

#[test]
fn test_allow_all_lists_every_value_in_order() {
    let ty = color();
    let names: Vec<&str> = AllowAll.enum_values(&ty).into_iter().map(EnumValue::name).collect();
    assert_eq!(names, vec!["RED", "GREEN", "BLUE"]);
}
