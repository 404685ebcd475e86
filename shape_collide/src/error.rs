use static_aabb2d_index::StaticAABB2DIndexBuildError;
use thiserror::Error;

#[cfg(feature = "serde")]
use crate::shape::ShapeKind;

/// Failure to read a shape definition, see [crate::Shape::from_json].
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ShapeParseError {
    #[error("invalid shape JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("shape definition must be a JSON object")]
    NotAnObject,
    #[error("shape definition has no \"type\" tag")]
    MissingType,
    #[error("unknown shape type {0}")]
    UnknownType(String),
    #[error("{kind} definition is missing field \"{field}\"")]
    MissingField {
        kind: ShapeKind,
        field: &'static str,
    },
    #[error("{kind} field \"{field}\" is not a number")]
    NotANumber {
        kind: ShapeKind,
        field: &'static str,
    },
    #[error("{kind} field \"{field}\" must not be negative")]
    NegativeSize {
        kind: ShapeKind,
        field: &'static str,
    },
    #[error("{kind} definition has unexpected field \"{field}\"")]
    UnexpectedField { kind: ShapeKind, field: String },
}

/// Failure to build a [crate::ShapeIndex].
#[derive(Debug, Error)]
pub enum ShapeIndexError {
    #[error("failed to build shape index: {0}")]
    Build(StaticAABB2DIndexBuildError),
}
