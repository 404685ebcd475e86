//! Reading shapes from JSON definitions.
//!
//! A definition is an object with a `type` tag and exactly the numeric fields of that primitive:
//!
//! ```json
//! { "type": "rect", "x": 0, "y": 0, "w": 32, "h": 16 }
//! { "type": "circle", "x": 8, "y": 8, "r": 4 }
//! { "type": "edge", "x1": 0, "y1": 0, "x2": 10, "y2": 5 }
//! ```
use crate::{
    core::traits::Real,
    error::ShapeParseError,
    primitives::{Circle, Edge, Rect},
    shape::{Shape, ShapeKind},
};
use serde::Serialize;
use serde_json::{Map, Value};

const TYPE_TAG: &str = "type";

fn field_names(kind: ShapeKind) -> &'static [&'static str] {
    match kind {
        ShapeKind::Rect => &["x", "y", "w", "h"],
        ShapeKind::Circle => &["x", "y", "r"],
        ShapeKind::Edge => &["x1", "y1", "x2", "y2"],
    }
}

fn is_size_field(kind: ShapeKind, field: &str) -> bool {
    match kind {
        ShapeKind::Rect => field == "w" || field == "h",
        ShapeKind::Circle => field == "r",
        ShapeKind::Edge => false,
    }
}

fn number_field<T>(
    obj: &Map<String, Value>,
    kind: ShapeKind,
    field: &'static str,
) -> Result<T, ShapeParseError>
where
    T: Real,
{
    let value = obj
        .get(field)
        .ok_or(ShapeParseError::MissingField { kind, field })?;
    let n = value
        .as_f64()
        .and_then(|v| <T as num_traits::NumCast>::from(v))
        .ok_or(ShapeParseError::NotANumber { kind, field })?;
    if is_size_field(kind, field) && n < T::zero() {
        return Err(ShapeParseError::NegativeSize { kind, field });
    }
    Ok(n)
}

/// Read exactly the fields of `kind` from `obj`. `allowed_tag` names one extra key that is
/// skipped rather than rejected.
fn read_fields<T>(
    obj: &Map<String, Value>,
    kind: ShapeKind,
    allowed_tag: Option<&str>,
) -> Result<[T; 4], ShapeParseError>
where
    T: Real,
{
    let fields = field_names(kind);
    if let Some(extra) = obj
        .keys()
        .find(|k| Some(k.as_str()) != allowed_tag && !fields.contains(&k.as_str()))
    {
        return Err(ShapeParseError::UnexpectedField {
            kind,
            field: extra.clone(),
        });
    }

    let mut v = [T::zero(); 4];
    for (slot, &field) in v.iter_mut().zip(fields) {
        *slot = number_field(obj, kind, field)?;
    }
    Ok(v)
}

/// Fields of an untagged primitive definition, e.g. `{ "x": 0, "y": 0, "r": 1 }` for a circle.
fn read_primitive<T>(value: &Value, kind: ShapeKind) -> Result<[T; 4], ShapeParseError>
where
    T: Real,
{
    let obj = value.as_object().ok_or(ShapeParseError::NotAnObject)?;
    read_fields(obj, kind, None)
}

impl<T> Shape<T>
where
    T: Real,
{
    /// Parse a shape from a JSON definition (see the module docs for the format).
    ///
    /// Any problem is an error, a malformed definition never yields a default shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shape_collide::*;
    /// let v = serde_json::json!({ "type": "circle", "x": 1.0, "y": 2.0, "r": 3.0 });
    /// assert_eq!(Shape::from_json(&v).unwrap(), Shape::circle(1.0, 2.0, 3.0));
    ///
    /// let v = serde_json::json!({ "type": "circle", "x": 1.0, "y": 2.0 });
    /// assert!(matches!(
    ///     Shape::<f64>::from_json(&v),
    ///     Err(ShapeParseError::MissingField { field: "r", .. })
    /// ));
    /// ```
    pub fn from_json(value: &Value) -> Result<Self, ShapeParseError> {
        let obj = value.as_object().ok_or(ShapeParseError::NotAnObject)?;
        let tag = obj.get(TYPE_TAG).ok_or(ShapeParseError::MissingType)?;
        let kind = tag
            .as_str()
            .and_then(ShapeKind::from_name)
            .ok_or_else(|| ShapeParseError::UnknownType(tag.to_string()))?;

        let v = read_fields(obj, kind, Some(TYPE_TAG))?;
        let shape = match kind {
            ShapeKind::Rect => Shape::rect(v[0], v[1], v[2], v[3]),
            ShapeKind::Circle => Shape::circle(v[0], v[1], v[2]),
            ShapeKind::Edge => Shape::edge(v[0], v[1], v[2], v[3]),
        };
        tracing::debug!(%shape, "parsed shape definition");
        Ok(shape)
    }

    /// Parse a shape from JSON text, see [Shape::from_json].
    pub fn from_json_str(s: &str) -> Result<Self, ShapeParseError> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json(&value)
    }

    /// Write the shape as a JSON definition readable by [Shape::from_json].
    pub fn to_json(&self) -> Result<Value, ShapeParseError>
    where
        T: Serialize,
    {
        Ok(serde_json::to_value(self)?)
    }
}

// `Deserialize` for the shape types goes through these conversions so that serde and
// `Shape::from_json` accept exactly the same definitions.

impl<T> TryFrom<Value> for Shape<T>
where
    T: Real,
{
    type Error = ShapeParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Shape::from_json(&value)
    }
}

impl<T> TryFrom<Value> for Rect<T>
where
    T: Real,
{
    type Error = ShapeParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let [x, y, w, h] = read_primitive(&value, ShapeKind::Rect)?;
        Ok(Rect::new(x, y, w, h))
    }
}

impl<T> TryFrom<Value> for Circle<T>
where
    T: Real,
{
    type Error = ShapeParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let [x, y, r, _] = read_primitive(&value, ShapeKind::Circle)?;
        Ok(Circle::new(x, y, r))
    }
}

impl<T> TryFrom<Value> for Edge<T>
where
    T: Real,
{
    type Error = ShapeParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let [x1, y1, x2, y2] = read_primitive(&value, ShapeKind::Edge)?;
        Ok(Edge::new(x1, y1, x2, y2))
    }
}
