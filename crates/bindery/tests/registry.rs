//! Path-based entity construction through the global registry, including
//! the startup registration performed by the derive macro.

use bindery::{
    Entity, binder, coerce,
    error::BindError,
    registry,
    traits::{Entity as _, FieldAccess, Path},
    value::Value,
};

#[derive(Clone, Debug, Default, Entity, PartialEq)]
struct Widget {
    id: i64,
    label: String,
    parts: Vec<i32>,
}

#[test]
fn derived_entities_register_at_startup() {
    let entry = registry::resolve(Widget::PATH).unwrap();
    assert_eq!(entry.model.entity_name, "widget");
    assert!(registry::paths().contains(&Widget::PATH));
}

#[test]
fn create_by_path_yields_a_working_entity() {
    let mut entity = binder::create_entity_by_path(Widget::PATH).unwrap();
    assert_eq!(entity.model().path, Widget::PATH);

    let widget: &mut dyn FieldAccess = entity.as_mut();
    binder::set_field(widget, "label", Value::Text("gear".into())).unwrap();
    binder::set_field_with(widget, "parts", |kind| coerce::bind(kind, Some("1,1,2"))).unwrap();
    assert_eq!(
        binder::get_field(widget, "label").unwrap(),
        Value::Text("gear".into())
    );
    assert_eq!(
        binder::get_field(widget, "parts").unwrap(),
        Value::List(vec![Value::Int(1), Value::Int(1), Value::Int(2)])
    );
}

#[test]
fn create_by_path_with_id_assigns_the_identifier() {
    let entity = binder::create_entity_by_path_with_id(Widget::PATH, Value::Long(5)).unwrap();
    assert_eq!(entity.id_value(), Value::Long(5));
}

#[test]
fn unknown_path_fails_with_class_resolution() {
    let err = binder::create_entity_by_path("com::nowhere::Missing").unwrap_err();
    assert!(matches!(err, BindError::ClassResolution { .. }));
}
