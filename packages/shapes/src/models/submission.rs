use common::{EntityKind, Normalize, Patch, set_if_present};
use serde::{Deserialize, Serialize};

/// Submission record as received from a data source.
///
/// `eventId` and `participantId` point at the owning event and participant;
/// they are carried as-is and never checked here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_abstract: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_sub_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Submission record with every field populated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionUi {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub event_id: i32,
    #[schema(example = 1)]
    pub participant_id: i32,
    #[schema(example = "Compilers for Everyone")]
    pub title: String,
    pub short_description: String,
    pub description_abstract: String,
    #[schema(example = "Poster")]
    pub submission_category: String,
    #[schema(example = "Systems")]
    pub submission_sub_category: String,
    /// Comma-separated keywords.
    #[schema(example = "compilers, education")]
    pub keywords: String,
    pub external_link: String,
    #[schema(example = "submitted")]
    pub submission_status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<SubmissionResponse> for SubmissionUi {
    fn from(r: SubmissionResponse) -> Self {
        Self {
            id: r.id.unwrap_or_default(),
            event_id: r.event_id.unwrap_or_default(),
            participant_id: r.participant_id.unwrap_or_default(),
            title: r.title.unwrap_or_default(),
            short_description: r.short_description.unwrap_or_default(),
            description_abstract: r.description_abstract.unwrap_or_default(),
            submission_category: r.submission_category.unwrap_or_default(),
            submission_sub_category: r.submission_sub_category.unwrap_or_default(),
            keywords: r.keywords.unwrap_or_default(),
            external_link: r.external_link.unwrap_or_default(),
            submission_status: r.submission_status.unwrap_or_default(),
            created_at: r.created_at.unwrap_or_default(),
            updated_at: r.updated_at.unwrap_or_default(),
        }
    }
}

impl From<SubmissionUi> for SubmissionResponse {
    fn from(u: SubmissionUi) -> Self {
        Self {
            id: Some(u.id),
            event_id: Some(u.event_id),
            participant_id: Some(u.participant_id),
            title: Some(u.title),
            short_description: Some(u.short_description),
            description_abstract: Some(u.description_abstract),
            submission_category: Some(u.submission_category),
            submission_sub_category: Some(u.submission_sub_category),
            keywords: Some(u.keywords),
            external_link: Some(u.external_link),
            submission_status: Some(u.submission_status),
            created_at: Some(u.created_at),
            updated_at: Some(u.updated_at),
        }
    }
}

impl Normalize for SubmissionResponse {
    type Complete = SubmissionUi;
    const KIND: EntityKind = EntityKind::Submission;
}

impl Patch<SubmissionResponse> for SubmissionUi {
    fn apply(&mut self, patch: SubmissionResponse) {
        let SubmissionResponse {
            id,
            event_id,
            participant_id,
            title,
            short_description,
            description_abstract,
            submission_category,
            submission_sub_category,
            keywords,
            external_link,
            submission_status,
            created_at,
            updated_at,
        } = patch;

        set_if_present(&mut self.id, id);
        set_if_present(&mut self.event_id, event_id);
        set_if_present(&mut self.participant_id, participant_id);
        set_if_present(&mut self.title, title);
        set_if_present(&mut self.short_description, short_description);
        set_if_present(&mut self.description_abstract, description_abstract);
        set_if_present(&mut self.submission_category, submission_category);
        set_if_present(&mut self.submission_sub_category, submission_sub_category);
        set_if_present(&mut self.keywords, keywords);
        set_if_present(&mut self.external_link, external_link);
        set_if_present(&mut self.submission_status, submission_status);
        set_if_present(&mut self.created_at, created_at);
        set_if_present(&mut self.updated_at, updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_populated_record_passes_through() {
        let partial = SubmissionResponse {
            id: Some(12),
            event_id: Some(1),
            participant_id: Some(8),
            title: Some("Compilers for Everyone".into()),
            short_description: Some("A poster".into()),
            description_abstract: Some("Longer abstract".into()),
            submission_category: Some("Poster".into()),
            submission_sub_category: Some("Systems".into()),
            keywords: Some("compilers, education".into()),
            external_link: Some("https://example.org/poster".into()),
            submission_status: Some("submitted".into()),
            created_at: Some("2026-03-01T10:00:00Z".into()),
            updated_at: Some("2026-03-02T10:00:00Z".into()),
        };

        let ui = partial.clone().normalize();
        assert_eq!(SubmissionResponse::from(ui), partial);
    }

    #[test]
    fn test_status_is_passed_through_verbatim() {
        let partial = SubmissionResponse {
            submission_status: Some("Not A Known Status".into()),
            ..Default::default()
        };
        assert_eq!(partial.normalize().submission_status, "Not A Known Status");
    }
}
