//! Normalization of untyped JSON records, dispatched on [`EntityKind`].

use common::error::{Result, json_type_name};
use common::{EntityKind, Normalize, ShapeError};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::*;

/// Normalize one JSON object as a record of `kind`.
///
/// The object is read as the kind's partial form (`null` counts as absent,
/// unknown keys are dropped) and the complete form is returned as JSON.
pub fn normalize_value(kind: EntityKind, value: Value) -> Result<Value> {
    match kind {
        EntityKind::User => normalize_as::<UserResponse>(value),
        EntityKind::Event => normalize_as::<EventResponse>(value),
        EntityKind::Participant => normalize_as::<ParticipantResponse>(value),
        EntityKind::Submission => normalize_as::<SubmissionResponse>(value),
        EntityKind::Evaluator => normalize_as::<EvaluatorResponse>(value),
        EntityKind::Coordinator => normalize_as::<CoordinatorResponse>(value),
        EntityKind::Criterion => normalize_as::<CriterionResponse>(value),
        EntityKind::Evaluation => normalize_as::<EvaluationResponse>(value),
        EntityKind::Assignment => normalize_as::<AssignmentResponse>(value),
    }
}

/// Normalize either a single object or an array of objects.
///
/// Arrays keep their length and order. The first failing element aborts the
/// batch with [`ShapeError::AtIndex`].
pub fn normalize_batch(kind: EntityKind, value: Value) -> Result<Value> {
    let items = match value {
        Value::Array(items) => items,
        other => return normalize_value(kind, other),
    };

    debug!(%kind, count = items.len(), "Normalizing batch");

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            normalize_value(kind, item).map_err(|e| ShapeError::AtIndex {
                index,
                source: Box::new(e),
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

fn normalize_as<P>(value: Value) -> Result<Value>
where
    P: Normalize + DeserializeOwned,
    P::Complete: Serialize,
{
    let kind = P::KIND;

    if !value.is_object() {
        let found = json_type_name(&value);
        warn!(%kind, found, "Rejected non-object record");
        return Err(ShapeError::NotAnObject { kind, found });
    }

    let partial: P = serde_json::from_value(value).map_err(|source| {
        warn!(%kind, error = %source, "Failed to decode record");
        ShapeError::Decode { kind, source }
    })?;

    let complete = serde_json::to_value(partial.normalize())
        .map_err(|source| ShapeError::Encode { kind, source })?;
    debug!(%kind, "Normalized record");

    Ok(complete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dispatches_on_kind() {
        let out = normalize_value(EntityKind::Assignment, json!({ "id": 5 })).unwrap();
        assert_eq!(
            out,
            json!({
                "id": 5,
                "eventId": 0,
                "submissionId": 0,
                "evaluatorId": 0,
                "assignedAt": "",
            })
        );
    }

    #[test]
    fn test_rejects_non_object() {
        let err = normalize_value(EntityKind::User, json!("alice")).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::NotAnObject {
                kind: EntityKind::User,
                found: "string"
            }
        ));
    }

    #[test]
    fn test_wrong_field_type_is_decode_error() {
        let err = normalize_value(EntityKind::Criterion, json!({ "required": "yes" })).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::Decode {
                kind: EntityKind::Criterion,
                ..
            }
        ));
    }

    #[test]
    fn test_id_above_i32_range_is_decode_error() {
        let err = normalize_value(EntityKind::Assignment, json!({ "id": 3_000_000_000u64 }))
            .unwrap_err();
        assert!(matches!(
            err,
            ShapeError::Decode {
                kind: EntityKind::Assignment,
                ..
            }
        ));
        assert!(err.to_string().contains("3000000000"));

        let max = normalize_value(EntityKind::Assignment, json!({ "id": i32::MAX })).unwrap();
        assert_eq!(max["id"], i32::MAX);
    }

    #[test]
    fn test_batch_keeps_order_and_length() {
        let out = normalize_batch(
            EntityKind::Evaluation,
            json!([{ "id": 2 }, {}, { "id": 1, "score": 3.5 }]),
        )
        .unwrap();

        let items = out.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["id"], 2);
        assert_eq!(items[1]["id"], 0);
        assert_eq!(items[2]["score"], 3.5);
    }

    #[test]
    fn test_batch_reports_failing_index() {
        let err = normalize_batch(EntityKind::Event, json!([{}, {}, 7])).unwrap_err();
        match err {
            ShapeError::AtIndex { index, source } => {
                assert_eq!(index, 2);
                assert!(matches!(*source, ShapeError::NotAnObject { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_batch_accepts_single_object() {
        let out = normalize_batch(EntityKind::Coordinator, json!({ "acceptedInvite": true })).unwrap();
        assert_eq!(out["acceptedInvite"], true);
        assert_eq!(out["email"], "");
    }

    #[test]
    fn test_empty_batch() {
        let out = normalize_batch(EntityKind::User, json!([])).unwrap();
        assert_eq!(out, json!([]));
    }
}
