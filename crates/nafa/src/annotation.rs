//! Sensory annotation types.
//!
//! An annotation is a user-submitted noise/light/crowd rating for a named
//! location. Records are independent of any particular journey.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Prefix carried by every generated annotation identifier.
pub const ID_PREFIX: &str = "ann-";

/// The payload a client submits to create an annotation.
///
/// Fields hold whatever JSON the client sent. `None` means the key was
/// absent; an explicit `null` is kept as `Some(Value::Null)`. Nothing is
/// type- or range-checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAnnotation {
    /// Identifier of the annotated location.
    pub location_id: Option<Value>,
    /// Human-readable location name.
    pub location_name: Option<Value>,
    /// Noise rating, nominally 0-10.
    pub noise: Option<Value>,
    /// Light rating, nominally 0-10.
    pub light: Option<Value>,
    /// Crowd rating, nominally 0-10.
    pub crowd: Option<Value>,
    /// Free-form notes.
    pub notes: Option<Value>,
}

impl NewAnnotation {
    /// Parse a request body into an annotation payload.
    ///
    /// Any JSON document other than `null` is accepted. Non-object documents
    /// yield a payload with every field absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequestBody`] if the bytes are not JSON or the
    /// document is `null`.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body).map_err(Error::InvalidRequestBody)?;
        match value {
            Value::Null => Err(Error::InvalidRequestBody(serde_json::Error::custom(
                "request body is null",
            ))),
            Value::Object(map) => Ok(Self::from_object(&map)),
            _ => Ok(Self::default()),
        }
    }

    fn from_object(map: &Map<String, Value>) -> Self {
        let field = |key: &str| map.get(key).cloned();
        Self {
            location_id: field("locationId"),
            location_name: field("locationName"),
            noise: field("noise"),
            light: field("light"),
            crowd: field("crowd"),
            notes: field("notes"),
        }
    }
}

/// A stored sensory annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    /// Unique identifier, assigned by the store.
    pub id: String,

    /// Identifier of the annotated location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<Value>,

    /// Human-readable location name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<Value>,

    /// Noise rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise: Option<Value>,

    /// Light rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<Value>,

    /// Crowd rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crowd: Option<Value>,

    /// Free-form notes, `null` when none were given.
    pub notes: Option<Value>,

    /// Creation instant in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl Annotation {
    /// Build a record from a submitted payload.
    ///
    /// Falsy notes (`""`, `0`, `false`, `null`) are normalized to `None`.
    #[must_use]
    pub fn from_input(id: String, input: NewAnnotation, timestamp: i64) -> Self {
        Self {
            id,
            location_id: input.location_id,
            location_name: input.location_name,
            noise: input.noise,
            light: input.light,
            crowd: input.crowd,
            notes: input.notes.filter(is_truthy),
            timestamp,
        }
    }

    /// Format the identifier for the `sequence`-th annotation created at
    /// `timestamp`.
    #[must_use]
    pub fn make_id(timestamp: i64, sequence: u64) -> String {
        format!("{ID_PREFIX}{timestamp}-{sequence}")
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
