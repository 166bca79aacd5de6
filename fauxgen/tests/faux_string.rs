//! Integration tests for the `faux_string` mark, driven through the
//! collection hook.

mod common;

use common::FakeMetafunc;
use fauxgen::{Mark, Value};

fn contains_number(value: &str) -> bool {
    value.chars().any(|c| c.is_numeric())
}

fn registered_strings(metafunc: &FakeMetafunc) -> Vec<String> {
    metafunc
        .registration()
        .values
        .iter()
        .map(|value| value.as_str().expect("string value").to_string())
        .collect()
}

#[test]
fn test_mark_plain() {
    let mut metafunc =
        FakeMetafunc::new("test_something", &["value"]).with_mark(Mark::string([Value::from(10)]));
    metafunc.collect().unwrap();
    assert_eq!(metafunc.invocations(), 10);
}

#[test]
fn test_mark_correct_value() {
    let mut metafunc =
        FakeMetafunc::new("test_something", &["value"]).with_mark(Mark::string([Value::from(10)]));
    metafunc.collect().unwrap();
    assert_eq!(metafunc.registration().argnames, vec!["value"]);
    for value in registered_strings(&metafunc) {
        assert!(!value.is_empty());
    }
}

#[test]
fn test_mark_incorrect_value() {
    let mut metafunc =
        FakeMetafunc::new("test_something", &["foo"]).with_mark(Mark::string([Value::from(10)]));
    let err = metafunc.collect().unwrap_err();
    assert!(err.to_string().contains("uses no argument 'value'"));
    assert_eq!(metafunc.invocations(), 0);
}

#[test]
fn test_mark_str_type_argument() {
    let mut metafunc = FakeMetafunc::new("test_something", &["value"])
        .with_mark(Mark::string([Value::from("alpha")]));
    metafunc.collect().unwrap();
    assert_eq!(metafunc.invocations(), 1);
}

#[test]
fn test_mark_incorrect_str_type_argument() {
    let mut metafunc = FakeMetafunc::new("test_something", &["value"])
        .with_mark(Mark::string([Value::from("alphabet")]));
    let err = metafunc.collect().unwrap_err();
    assert!(
        err.to_string()
            .contains("String type alphabet is not supported")
    );
}

#[test]
fn test_mark_incorrect_argument() {
    let mut metafunc = FakeMetafunc::new("test_something", &["value"])
        .with_mark(Mark::string([Value::from("1")]));
    let err = metafunc.collect().unwrap_err();
    assert!(err.to_string().contains("String type 1 is not supported"));
}

#[test]
fn test_mark_invalid_integer() {
    let mut metafunc =
        FakeMetafunc::new("test_something", &["value"]).with_mark(Mark::string([Value::from(0)]));
    let err = metafunc.collect().unwrap_err();
    assert!(
        err.to_string()
            .contains("Mark expected an integer greater than 0")
    );
}

#[test]
fn test_gen_string_with_no_arguments() {
    let mut metafunc =
        FakeMetafunc::new("test_something", &["value"]).with_mark(Mark::string(Vec::new()));
    metafunc.collect().unwrap();
    assert_eq!(metafunc.invocations(), 1);
    assert!(!registered_strings(&metafunc)[0].is_empty());
}

#[test]
fn test_gen_alpha_string_with_length() {
    let mark = Mark::string([Value::from(4), Value::from("alpha")])
        .with_option("length", Value::from(12));
    let mut metafunc = FakeMetafunc::new("test_something", &["value"]).with_mark(mark);
    metafunc.collect().unwrap();

    assert_eq!(metafunc.invocations(), 4);
    for value in registered_strings(&metafunc) {
        assert_eq!(value.len(), 12);
        assert!(value.chars().all(|c| c.is_ascii_alphabetic()));
    }
}

#[test]
fn test_gen_string_with_validator() {
    let is_numeric = Value::callable(|args, _| {
        let passes = args[0]
            .as_str()
            .map(|s| !s.is_empty() && s.chars().all(|c| c.is_numeric()))
            .unwrap_or(false);
        Value::Bool(passes)
    });
    let mark = Mark::string([Value::from(1), Value::from("punctuation")])
        .with_option("length", Value::from(12))
        .with_option("validator", is_numeric)
        .with_option("default", Value::from("1"));
    let mut metafunc = FakeMetafunc::new("test_something", &["value"]).with_mark(mark);
    metafunc.collect().unwrap();
    assert_eq!(registered_strings(&metafunc), vec!["1"]);
}

#[test]
fn test_gen_alpha_string_with_variable_length() {
    let mark = Mark::string([Value::from(4), Value::from("alpha")])
        .with_option("length", Value::List(vec![Value::from(5), Value::from(15)]));
    let mut metafunc = FakeMetafunc::new("test_something", &["value"]).with_mark(mark);
    metafunc.collect().unwrap();

    let lengths: Vec<usize> = registered_strings(&metafunc)
        .iter()
        .map(|v| v.len())
        .collect();
    assert_eq!(lengths, vec![5, 15, 5, 15]);
}

#[test]
fn test_gen_string_with_empty_types() {
    // An empty category list means one category drawn at random; lengths
    // still cycle. The html kind wraps content in a tag, so only a lower
    // bound holds for the total length.
    let mark = Mark::string([Value::from(4), Value::List(Vec::new())])
        .with_option("length", Value::List(vec![Value::from(5), Value::from(30)]));
    let mut metafunc = FakeMetafunc::new("test_something", &["value"]).with_mark(mark);
    metafunc.collect().unwrap();

    assert_eq!(metafunc.invocations(), 4);
    for (item, value) in registered_strings(&metafunc).iter().enumerate() {
        let expected = if item % 2 == 0 { 5 } else { 30 };
        assert!(value.chars().count() >= expected);
    }
}

#[test]
fn test_gen_string_with_empty_length() {
    let mark = Mark::string([
        Value::from(4),
        Value::List(vec![Value::from("alpha"), Value::from("alphanumeric")]),
    ])
    .with_option("length", Value::List(Vec::new()));
    let mut metafunc = FakeMetafunc::new("test_something", &["value"]).with_mark(mark);
    metafunc.collect().unwrap();

    for value in registered_strings(&metafunc) {
        assert_eq!(value.len(), 10);
    }
}

#[test]
fn test_gen_string_with_empty_types_and_length() {
    let mark = Mark::string([Value::from(4), Value::List(Vec::new())])
        .with_option("length", Value::List(Vec::new()));
    let mut metafunc = FakeMetafunc::new("test_something", &["value"]).with_mark(mark);
    metafunc.collect().unwrap();

    assert_eq!(metafunc.invocations(), 4);
    for value in registered_strings(&metafunc) {
        assert!(value.chars().count() >= 10);
    }
}

#[test]
fn test_gen_string_with_variable_types() {
    let mark = Mark::string([
        Value::from(4),
        Value::List(vec![Value::from("alpha"), Value::from("numeric")]),
    ])
    .with_option("length", Value::List(vec![Value::from(5), Value::from(30)]));
    let mut metafunc = FakeMetafunc::new("test_something", &["value"]).with_mark(mark);
    metafunc.collect().unwrap();

    for value in registered_strings(&metafunc) {
        if value.len() == 5 {
            assert!(!contains_number(&value));
        } else {
            assert_eq!(value.len(), 30);
            assert!(contains_number(&value));
        }
    }
}

#[test]
fn test_gen_alpha_string_with_custom_arg_name() {
    let mark = Mark::string([Value::from(2), Value::from("alpha")])
        .with_option("argnames", Value::from("name"));
    let mut metafunc = FakeMetafunc::new("test_something", &["name"]).with_mark(mark);
    metafunc.collect().unwrap();

    assert_eq!(metafunc.registration().argnames, vec!["name"]);
    for value in registered_strings(&metafunc) {
        assert_eq!(value.len(), 10);
    }
}

#[test]
fn test_ids_follow_the_mark_name() {
    let mut metafunc =
        FakeMetafunc::new("test_something", &["value"]).with_mark(Mark::string([Value::from(2)]));
    metafunc.collect().unwrap();
    assert_eq!(
        metafunc.registration().ids.as_deref().unwrap(),
        ["faux_string_0", "faux_string_1"]
    );
}

#[test]
fn test_seeded_marks_register_identical_values() {
    let run = || {
        let mark = Mark::string([Value::from(3), Value::from("cjk")])
            .with_option("seed", Value::from(11));
        let mut metafunc = FakeMetafunc::new("test_something", &["value"]).with_mark(mark);
        metafunc.collect().unwrap();
        registered_strings(&metafunc)
    };
    assert_eq!(run(), run());
}
