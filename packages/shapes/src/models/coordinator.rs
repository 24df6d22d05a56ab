use common::{EntityKind, Normalize, Patch, set_if_present};
use serde::{Deserialize, Serialize};

/// Coordinator record as received.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorResponse {
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
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expertise_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_invite_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_invite_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_invite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Coordinator record, fully populated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorUi {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub event_id: i32,
    pub first_name: String,
    pub last_name: String,
    #[schema(example = "coordinator@example.org")]
    pub email: String,
    pub phone: String,
    pub title_role: String,
    pub expertise_description: String,
    pub affiliation: String,
    #[schema(example = "invited")]
    pub status: String,
    pub accepted_invite_token: String,
    pub accepted_invite_date: String,
    #[schema(example = false)]
    pub accepted_invite: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CoordinatorResponse> for CoordinatorUi {
    fn from(r: CoordinatorResponse) -> Self {
        Self {
            id: r.id.unwrap_or_default(),
            event_id: r.event_id.unwrap_or_default(),
            first_name: r.first_name.unwrap_or_default(),
            last_name: r.last_name.unwrap_or_default(),
            email: r.email.unwrap_or_default(),
            phone: r.phone.unwrap_or_default(),
            title_role: r.title_role.unwrap_or_default(),
            expertise_description: r.expertise_description.unwrap_or_default(),
            affiliation: r.affiliation.unwrap_or_default(),
            status: r.status.unwrap_or_default(),
            accepted_invite_token: r.accepted_invite_token.unwrap_or_default(),
            accepted_invite_date: r.accepted_invite_date.unwrap_or_default(),
            accepted_invite: r.accepted_invite.unwrap_or_default(),
            created_at: r.created_at.unwrap_or_default(),
            updated_at: r.updated_at.unwrap_or_default(),
        }
    }
}

impl From<CoordinatorUi> for CoordinatorResponse {
    fn from(u: CoordinatorUi) -> Self {
        Self {
            id: Some(u.id),
            event_id: Some(u.event_id),
            first_name: Some(u.first_name),
            last_name: Some(u.last_name),
            email: Some(u.email),
            phone: Some(u.phone),
            title_role: Some(u.title_role),
            expertise_description: Some(u.expertise_description),
            affiliation: Some(u.affiliation),
            status: Some(u.status),
            accepted_invite_token: Some(u.accepted_invite_token),
            accepted_invite_date: Some(u.accepted_invite_date),
            accepted_invite: Some(u.accepted_invite),
            created_at: Some(u.created_at),
            updated_at: Some(u.updated_at),
        }
    }
}

impl Normalize for CoordinatorResponse {
    type Complete = CoordinatorUi;
    const KIND: EntityKind = EntityKind::Coordinator;
}

impl Patch<CoordinatorResponse> for CoordinatorUi {
    fn apply(&mut self, patch: CoordinatorResponse) {
        let CoordinatorResponse {
            id,
            event_id,
            first_name,
            last_name,
            email,
            phone,
            title_role,
            expertise_description,
            affiliation,
            status,
            accepted_invite_token,
            accepted_invite_date,
            accepted_invite,
            created_at,
            updated_at,
        } = patch;

        set_if_present(&mut self.id, id);
        set_if_present(&mut self.event_id, event_id);
        set_if_present(&mut self.first_name, first_name);
        set_if_present(&mut self.last_name, last_name);
        set_if_present(&mut self.email, email);
        set_if_present(&mut self.phone, phone);
        set_if_present(&mut self.title_role, title_role);
        set_if_present(&mut self.expertise_description, expertise_description);
        set_if_present(&mut self.affiliation, affiliation);
        set_if_present(&mut self.status, status);
        set_if_present(&mut self.accepted_invite_token, accepted_invite_token);
        set_if_present(&mut self.accepted_invite_date, accepted_invite_date);
        set_if_present(&mut self.accepted_invite, accepted_invite);
        set_if_present(&mut self.created_at, created_at);
        set_if_present(&mut self.updated_at, updated_at);
    }
}
