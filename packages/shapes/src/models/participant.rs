use common::{EntityKind, Normalize, Patch, set_if_present};
use serde::{Deserialize, Serialize};

/// Participant record as received.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgent_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_contributors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Participant record, fully populated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantUi {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub event_id: i32,
    #[schema(example = "Grace")]
    pub first_name: String,
    #[schema(example = "Hopper")]
    pub last_name: String,
    #[schema(example = "grace@example.org")]
    pub email: String,
    /// Phone number or address for day-of contact.
    pub urgent_contact: String,
    #[schema(example = "Graduate Student")]
    pub title_role: String,
    pub affiliation: String,
    /// Free-text list of co-authors.
    pub additional_contributors: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ParticipantResponse> for ParticipantUi {
    fn from(r: ParticipantResponse) -> Self {
        Self {
            id: r.id.unwrap_or_default(),
            event_id: r.event_id.unwrap_or_default(),
            first_name: r.first_name.unwrap_or_default(),
            last_name: r.last_name.unwrap_or_default(),
            email: r.email.unwrap_or_default(),
            urgent_contact: r.urgent_contact.unwrap_or_default(),
            title_role: r.title_role.unwrap_or_default(),
            affiliation: r.affiliation.unwrap_or_default(),
            additional_contributors: r.additional_contributors.unwrap_or_default(),
            created_at: r.created_at.unwrap_or_default(),
            updated_at: r.updated_at.unwrap_or_default(),
        }
    }
}

impl From<ParticipantUi> for ParticipantResponse {
    fn from(u: ParticipantUi) -> Self {
        Self {
            id: Some(u.id),
            event_id: Some(u.event_id),
            first_name: Some(u.first_name),
            last_name: Some(u.last_name),
            email: Some(u.email),
            urgent_contact: Some(u.urgent_contact),
            title_role: Some(u.title_role),
            affiliation: Some(u.affiliation),
            additional_contributors: Some(u.additional_contributors),
            created_at: Some(u.created_at),
            updated_at: Some(u.updated_at),
        }
    }
}

impl Normalize for ParticipantResponse {
    type Complete = ParticipantUi;
    const KIND: EntityKind = EntityKind::Participant;
}

impl Patch<ParticipantResponse> for ParticipantUi {
    fn apply(&mut self, patch: ParticipantResponse) {
        let ParticipantResponse {
            id,
            event_id,
            first_name,
            last_name,
            email,
            urgent_contact,
            title_role,
            affiliation,
            additional_contributors,
            created_at,
            updated_at,
        } = patch;

        set_if_present(&mut self.id, id);
        set_if_present(&mut self.event_id, event_id);
        set_if_present(&mut self.first_name, first_name);
        set_if_present(&mut self.last_name, last_name);
        set_if_present(&mut self.email, email);
        set_if_present(&mut self.urgent_contact, urgent_contact);
        set_if_present(&mut self.title_role, title_role);
        set_if_present(&mut self.affiliation, affiliation);
        set_if_present(&mut self.additional_contributors, additional_contributors);
        set_if_present(&mut self.created_at, created_at);
        set_if_present(&mut self.updated_at, updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_keys_are_ignored() {
        let partial: ParticipantResponse = serde_json::from_value(json!({
            "id": 4,
            "eventId": 1,
            "badgeColor": "green",
        }))
        .unwrap();

        let ui = partial.normalize();
        assert_eq!(ui.id, 4);
        assert_eq!(ui.event_id, 1);
        assert_eq!(ui.additional_contributors, "");
    }

    #[test]
    fn test_complete_form_serializes_every_field() {
        let value = serde_json::to_value(ParticipantUi::default()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 11);
        assert_eq!(object["urgentContact"], "");
        assert_eq!(object["titleRole"], "");
        assert_eq!(object["eventId"], 0);
    }
}
