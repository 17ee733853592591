use crate::{
    types::{DateTime, Float64},
    value::Value,
};

// ---- helpers -----------------------------------------------------------

fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn v_f64(x: f64) -> Value {
    Value::Double(Float64::try_new(x).expect("finite f64"))
}

#[test]
fn set_of_collapses_duplicates_first_occurrence_wins() {
    let set = Value::set_of(vec![v_txt("a"), v_txt("a"), v_txt("b")]);
    assert_eq!(set.as_set().unwrap(), &[v_txt("a"), v_txt("b")]);
}

#[test]
fn set_of_uses_value_equality_across_floats() {
    let set = Value::set_of(vec![v_f64(1.0), v_f64(-0.0), v_f64(0.0)]);
    assert_eq!(set.as_set().unwrap().len(), 2);
}

#[test]
fn list_keeps_duplicates_and_order() {
    let list = Value::List(vec![v_txt("a"), v_txt("a"), v_txt("b")]);
    assert_eq!(list.as_list().unwrap().len(), 3);
}

#[test]
fn null_predicate() {
    assert!(Value::Null.is_null());
    assert!(!v_txt("").is_null());
}

#[test]
fn labels_are_stable() {
    assert_eq!(Value::Null.label(), "null");
    assert_eq!(Value::Long(1).label(), "long");
    assert_eq!(Value::Date(DateTime::EPOCH).label(), "date");
}

#[test]
fn serializes_dates_as_pattern_strings() {
    let value = Value::Date(DateTime::new_checked(2020, 1, 2, 3, 4, 5).unwrap());
    let json = serde_json::to_string(&value).unwrap();
    assert!(json.contains("2020-01-02 03:04:05"));
}
