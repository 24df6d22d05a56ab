use thiserror::Error;

use crate::EntityKind;

/// Errors raised at the JSON boundary, before a record reaches the normalizer.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("Expected a JSON object for {kind}, got {found}")]
    NotAnObject {
        kind: EntityKind,
        found: &'static str,
    },

    /// A field had the wrong JSON type or was out of range. Ids and integer
    /// counts are `i32`, so a value above 2147483647 lands here too.
    #[error("Failed to decode {kind}: {source}")]
    Decode {
        kind: EntityKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode {kind}: {source}")]
    Encode {
        kind: EntityKind,
        #[source]
        source: serde_json::Error,
    },

    /// A record inside a batch failed; `index` is its zero-based position.
    #[error("Record {index}: {source}")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<ShapeError>,
    },
}

impl ShapeError {
    /// Entity kind the failing record was read as.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::NotAnObject { kind, .. } | Self::Decode { kind, .. } | Self::Encode { kind, .. } => {
                *kind
            }
            Self::AtIndex { source, .. } => source.kind(),
        }
    }
}

/// Short JSON type name for error messages.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

pub type Result<T> = std::result::Result<T, ShapeError>;
