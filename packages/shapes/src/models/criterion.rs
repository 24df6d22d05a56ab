use common::{EntityKind, Normalize, Patch, set_if_present};
use serde::{Deserialize, Serialize};

/// Rating criterion as received. Any field may be absent.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriterionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_pos: Option<i32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "common::number::serialize_option"
    )]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rating_value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_descriptors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Rating criterion with every field populated.
///
/// A missing `weight` or `maxRatingValue` normalizes to 0; scoring code that
/// divides by either must handle that case itself.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriterionUi {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub event_id: i32,
    #[schema(example = "Clarity")]
    pub label: String,
    pub description: String,
    #[schema(example = "Presentation")]
    pub category: String,
    /// Whether every evaluation must score this criterion.
    #[schema(example = true)]
    pub required: bool,
    /// Display position within the event, ascending.
    #[schema(example = 0)]
    pub sort_pos: i32,
    /// Relative weight of this criterion.
    #[schema(example = 1.5)]
    #[serde(serialize_with = "common::number::serialize")]
    pub weight: f64,
    /// Highest score an evaluator may give.
    #[schema(example = 5)]
    pub max_rating_value: i32,
    /// Labels for the rating scale, as stored.
    pub value_descriptors: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CriterionResponse> for CriterionUi {
    fn from(r: CriterionResponse) -> Self {
        Self {
            id: r.id.unwrap_or_default(),
            event_id: r.event_id.unwrap_or_default(),
            label: r.label.unwrap_or_default(),
            description: r.description.unwrap_or_default(),
            category: r.category.unwrap_or_default(),
            required: r.required.unwrap_or_default(),
            sort_pos: r.sort_pos.unwrap_or_default(),
            weight: r.weight.unwrap_or_default(),
            max_rating_value: r.max_rating_value.unwrap_or_default(),
            value_descriptors: r.value_descriptors.unwrap_or_default(),
            created_at: r.created_at.unwrap_or_default(),
            updated_at: r.updated_at.unwrap_or_default(),
        }
    }
}

impl From<CriterionUi> for CriterionResponse {
    fn from(u: CriterionUi) -> Self {
        Self {
            id: Some(u.id),
            event_id: Some(u.event_id),
            label: Some(u.label),
            description: Some(u.description),
            category: Some(u.category),
            required: Some(u.required),
            sort_pos: Some(u.sort_pos),
            weight: Some(u.weight),
            max_rating_value: Some(u.max_rating_value),
            value_descriptors: Some(u.value_descriptors),
            created_at: Some(u.created_at),
            updated_at: Some(u.updated_at),
        }
    }
}

impl Normalize for CriterionResponse {
    type Complete = CriterionUi;
    const KIND: EntityKind = EntityKind::Criterion;
}

impl Patch<CriterionResponse> for CriterionUi {
    fn apply(&mut self, patch: CriterionResponse) {
        let CriterionResponse {
            id,
            event_id,
            label,
            description,
            category,
            required,
            sort_pos,
            weight,
            max_rating_value,
            value_descriptors,
            created_at,
            updated_at,
        } = patch;

        set_if_present(&mut self.id, id);
        set_if_present(&mut self.event_id, event_id);
        set_if_present(&mut self.label, label);
        set_if_present(&mut self.description, description);
        set_if_present(&mut self.category, category);
        set_if_present(&mut self.required, required);
        set_if_present(&mut self.sort_pos, sort_pos);
        set_if_present(&mut self.weight, weight);
        set_if_present(&mut self.max_rating_value, max_rating_value);
        set_if_present(&mut self.value_descriptors, value_descriptors);
        set_if_present(&mut self.created_at, created_at);
        set_if_present(&mut self.updated_at, updated_at);
    }
}
