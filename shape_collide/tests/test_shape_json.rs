#![cfg(feature = "serde")]

use serde_json::json;
use shape_collide::{Shape, ShapeKind, ShapeParseError};

fn parse(s: &str) -> Result<Shape, ShapeParseError> {
    Shape::from_json_str(s)
}

#[test]
fn parses_all_kinds() {
    assert_eq!(
        parse(r#"{"type": "rect", "x": 0, "y": 0, "w": 32, "h": 16}"#).unwrap(),
        Shape::rect(0.0, 0.0, 32.0, 16.0)
    );
    assert_eq!(
        parse(r#"{"type": "circle", "x": 8, "y": 8.5, "r": 4}"#).unwrap(),
        Shape::circle(8.0, 8.5, 4.0)
    );
    assert_eq!(
        parse(r#"{"type": "edge", "x1": 0, "y1": 0, "x2": 10, "y2": -5}"#).unwrap(),
        Shape::edge(0.0, 0.0, 10.0, -5.0)
    );
}

#[test]
fn missing_or_unknown_type_is_an_error() {
    assert!(matches!(
        parse(r#"{"x": 0, "y": 0, "r": 1}"#),
        Err(ShapeParseError::MissingType)
    ));
    match parse(r#"{"type": "polygon", "x": 0}"#) {
        Err(ShapeParseError::UnknownType(name)) => assert_eq!(name, "\"polygon\""),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(matches!(
        parse(r#"{"type": 3, "x": 0, "y": 0, "r": 1}"#),
        Err(ShapeParseError::UnknownType(_))
    ));
}

#[test]
fn missing_field_is_an_error() {
    let err = parse(r#"{"type": "rect", "x": 0, "y": 0, "w": 32}"#).unwrap_err();
    assert!(matches!(
        err,
        ShapeParseError::MissingField {
            kind: ShapeKind::Rect,
            field: "h"
        }
    ));
    assert_eq!(err.to_string(), "rect definition is missing field \"h\"");
}

#[test]
fn non_numeric_field_is_an_error() {
    assert!(matches!(
        parse(r#"{"type": "edge", "x1": 0, "y1": "0", "x2": 1, "y2": 1}"#),
        Err(ShapeParseError::NotANumber {
            kind: ShapeKind::Edge,
            field: "y1"
        })
    ));
}

#[test]
fn extra_fields_are_rejected() {
    match parse(r#"{"type": "circle", "x": 0, "y": 0, "r": 1, "w": 2}"#) {
        Err(ShapeParseError::UnexpectedField { kind, field }) => {
            assert_eq!(kind, ShapeKind::Circle);
            assert_eq!(field, "w");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn malformed_input_is_an_error() {
    assert!(matches!(parse("{\"type\": "), Err(ShapeParseError::Json(_))));
    assert!(matches!(
        Shape::<f64>::from_json(&json!([1, 2, 3])),
        Err(ShapeParseError::NotAnObject)
    ));
}

#[test]
fn serialized_shapes_parse_back() {
    let shapes = [
        Shape::rect(1.5, -2.0, 3.0, 4.0),
        Shape::circle(0.0, 0.0, 0.0),
        Shape::edge(1.0, 2.0, 3.0, 4.0),
    ];
    for shape in shapes {
        let value = shape.to_json().unwrap();
        assert_eq!(value["type"], json!(shape.kind().name()));
        assert_eq!(Shape::from_json(&value).unwrap(), shape);
    }
}

#[test]
fn serde_deserialize_applies_the_same_rules() {
    let text = r#"{"type": "rect", "x": 0, "y": 0, "w": -5, "h": 1, "bogus": 7}"#;
    let err = serde_json::from_str::<Shape>(text).unwrap_err();
    assert!(err.to_string().contains("unexpected field \"bogus\""), "{err}");

    let text = r#"{"type": "rect", "x": 0, "y": 0, "w": -5, "h": 1}"#;
    let err = serde_json::from_str::<Shape>(text).unwrap_err();
    assert!(err.to_string().contains("\"w\" must not be negative"), "{err}");

    let shapes: Vec<Shape> = serde_json::from_str(
        r#"[{"type": "circle", "x": 1, "y": 2, "r": 3},
            {"type": "edge", "x1": 0, "y1": 0, "x2": 1, "y2": 1}]"#,
    )
    .unwrap();
    assert_eq!(
        shapes,
        [Shape::circle(1.0, 2.0, 3.0), Shape::edge(0.0, 0.0, 1.0, 1.0)]
    );
}
