use common::{EntityKind, Normalize, Patch, set_if_present};
use serde::{Deserialize, Serialize};

/// Submission-to-evaluator assignment as received.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluator_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_at: Option<String>,
}

/// Submission-to-evaluator assignment, fully populated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentUi {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub event_id: i32,
    #[schema(example = 1)]
    pub submission_id: i32,
    #[schema(example = 1)]
    pub evaluator_id: i32,
    #[schema(example = "2026-04-01T12:00:00Z")]
    pub assigned_at: String,
}

impl From<AssignmentResponse> for AssignmentUi {
    fn from(r: AssignmentResponse) -> Self {
        Self {
            id: r.id.unwrap_or_default(),
            event_id: r.event_id.unwrap_or_default(),
            submission_id: r.submission_id.unwrap_or_default(),
            evaluator_id: r.evaluator_id.unwrap_or_default(),
            assigned_at: r.assigned_at.unwrap_or_default(),
        }
    }
}

impl From<AssignmentUi> for AssignmentResponse {
    fn from(u: AssignmentUi) -> Self {
        Self {
            id: Some(u.id),
            event_id: Some(u.event_id),
            submission_id: Some(u.submission_id),
            evaluator_id: Some(u.evaluator_id),
            assigned_at: Some(u.assigned_at),
        }
    }
}

impl Normalize for AssignmentResponse {
    type Complete = AssignmentUi;
    const KIND: EntityKind = EntityKind::Assignment;
}

impl Patch<AssignmentResponse> for AssignmentUi {
    fn apply(&mut self, patch: AssignmentResponse) {
        let AssignmentResponse {
            id,
            event_id,
            submission_id,
            evaluator_id,
            assigned_at,
        } = patch;

        set_if_present(&mut self.id, id);
        set_if_present(&mut self.event_id, event_id);
        set_if_present(&mut self.submission_id, submission_id);
        set_if_present(&mut self.evaluator_id, evaluator_id);
        set_if_present(&mut self.assigned_at, assigned_at);
    }
}
