use common::{EntityKind, Normalize, Patch, set_if_present};
use serde::{Deserialize, Serialize};

/// A single score as received.
///
/// Links an assignment to one criterion via `assignmentId` and `criteriaId`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria_id: Option<i32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "common::number::serialize_option"
    )]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A single score with every field populated.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationUi {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub assignment_id: i32,
    /// Criterion being scored.
    #[schema(example = 1)]
    pub criteria_id: i32,
    #[schema(example = 4)]
    #[serde(serialize_with = "common::number::serialize")]
    pub score: f64,
    pub comments: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<EvaluationResponse> for EvaluationUi {
    fn from(r: EvaluationResponse) -> Self {
        Self {
            id: r.id.unwrap_or_default(),
            assignment_id: r.assignment_id.unwrap_or_default(),
            criteria_id: r.criteria_id.unwrap_or_default(),
            score: r.score.unwrap_or_default(),
            comments: r.comments.unwrap_or_default(),
            created_at: r.created_at.unwrap_or_default(),
            updated_at: r.updated_at.unwrap_or_default(),
        }
    }
}

impl From<EvaluationUi> for EvaluationResponse {
    fn from(u: EvaluationUi) -> Self {
        Self {
            id: Some(u.id),
            assignment_id: Some(u.assignment_id),
            criteria_id: Some(u.criteria_id),
            score: Some(u.score),
            comments: Some(u.comments),
            created_at: Some(u.created_at),
            updated_at: Some(u.updated_at),
        }
    }
}

impl Normalize for EvaluationResponse {
    type Complete = EvaluationUi;
    const KIND: EntityKind = EntityKind::Evaluation;
}

impl Patch<EvaluationResponse> for EvaluationUi {
    fn apply(&mut self, patch: EvaluationResponse) {
        let EvaluationResponse {
            id,
            assignment_id,
            criteria_id,
            score,
            comments,
            created_at,
            updated_at,
        } = patch;

        set_if_present(&mut self.id, id);
        set_if_present(&mut self.assignment_id, assignment_id);
        set_if_present(&mut self.criteria_id, criteria_id);
        set_if_present(&mut self.score, score);
        set_if_present(&mut self.comments, comments);
        set_if_present(&mut self.created_at, created_at);
        set_if_present(&mut self.updated_at, updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_with_references_only() {
        let partial: EvaluationResponse = serde_json::from_value(json!({
            "score": 5,
            "assignmentId": 3,
            "criteriaId": 9,
        }))
        .unwrap();

        assert_eq!(
            partial.normalize(),
            EvaluationUi {
                id: 0,
                assignment_id: 3,
                criteria_id: 9,
                score: 5.0,
                comments: String::new(),
                created_at: String::new(),
                updated_at: String::new(),
            }
        );
    }

    #[test]
    fn test_whole_score_serializes_as_integer() {
        let record = json!({
            "id": 1,
            "assignmentId": 3,
            "criteriaId": 9,
            "score": 5,
            "comments": "",
            "createdAt": "",
            "updatedAt": "",
        });
        let partial: EvaluationResponse = serde_json::from_value(record.clone()).unwrap();

        assert_eq!(serde_json::to_value(&partial).unwrap(), record);
        assert_eq!(serde_json::to_value(partial.normalize()).unwrap(), record);
    }

    #[test]
    fn test_fractional_score_keeps_fraction() {
        let ui = EvaluationUi {
            score: 3.5,
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(ui).unwrap()["score"], json!(3.5));
    }

    #[test]
    fn test_wrong_type_is_a_decode_error() {
        let result = serde_json::from_value::<EvaluationResponse>(json!({ "score": "five" }));
        assert!(result.is_err());
    }
}
