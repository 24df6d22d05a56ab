//! Serializers for `f64` fields that may carry whole numbers on the wire.
//!
//! Serde writes every `f64` with a fractional part, so a score received as `5`
//! would come back out as `5.0`. These helpers write finite whole values as
//! integers and everything else as a float.

use serde::Serializer;

// Largest magnitude an f64 holds without losing integer precision.
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

fn as_whole(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT)
        .then_some(value as i64)
}

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    match as_whole(*value) {
        Some(whole) => serializer.serialize_i64(whole),
        None => serializer.serialize_f64(*value),
    }
}

/// Same as [`serialize`] for optional fields. Pair with
/// `skip_serializing_if = "Option::is_none"` so absent values stay absent.
pub fn serialize_option<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serialize(value, serializer),
        None => serializer.serialize_none(),
    }
}
