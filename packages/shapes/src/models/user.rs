use common::{EntityKind, Normalize, Patch, set_if_present};
use serde::{Deserialize, Serialize};

/// Account record as delivered by a data source.
///
/// Every field is optional: a source may omit anything, and an omitted field
/// means "unknown", not "invalid". Resolve with [`Normalize::normalize`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magic_link_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magic_link_expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Account record with every field populated, ready for display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserUi {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@example.org")]
    pub email: String,
    pub password: String,
    #[schema(example = "Analytical Society")]
    pub organization: String,
    /// Whether the email address has been confirmed.
    #[schema(example = true)]
    pub is_verified: bool,
    /// One-time sign-in token, empty when none is outstanding.
    pub magic_link_token: String,
    #[schema(example = "2025-10-01T15:00:00Z")]
    pub magic_link_expires_at: String,
    #[schema(example = "2025-09-01T08:00:00Z")]
    pub registered_at: String,
    #[schema(example = "2025-10-01T14:30:00Z")]
    pub last_login_at: String,
    #[schema(example = "organizer")]
    pub role: String,
}

impl From<UserResponse> for UserUi {
    fn from(r: UserResponse) -> Self {
        Self {
            id: r.id.unwrap_or_default(),
            first_name: r.first_name.unwrap_or_default(),
            last_name: r.last_name.unwrap_or_default(),
            email: r.email.unwrap_or_default(),
            password: r.password.unwrap_or_default(),
            organization: r.organization.unwrap_or_default(),
            is_verified: r.is_verified.unwrap_or_default(),
            magic_link_token: r.magic_link_token.unwrap_or_default(),
            magic_link_expires_at: r.magic_link_expires_at.unwrap_or_default(),
            registered_at: r.registered_at.unwrap_or_default(),
            last_login_at: r.last_login_at.unwrap_or_default(),
            role: r.role.unwrap_or_default(),
        }
    }
}

impl From<UserUi> for UserResponse {
    fn from(u: UserUi) -> Self {
        Self {
            id: Some(u.id),
            first_name: Some(u.first_name),
            last_name: Some(u.last_name),
            email: Some(u.email),
            password: Some(u.password),
            organization: Some(u.organization),
            is_verified: Some(u.is_verified),
            magic_link_token: Some(u.magic_link_token),
            magic_link_expires_at: Some(u.magic_link_expires_at),
            registered_at: Some(u.registered_at),
            last_login_at: Some(u.last_login_at),
            role: Some(u.role),
        }
    }
}

impl Normalize for UserResponse {
    type Complete = UserUi;
    const KIND: EntityKind = EntityKind::User;
}

impl Patch<UserResponse> for UserUi {
    fn apply(&mut self, patch: UserResponse) {
        let UserResponse {
            id,
            first_name,
            last_name,
            email,
            password,
            organization,
            is_verified,
            magic_link_token,
            magic_link_expires_at,
            registered_at,
            last_login_at,
            role,
        } = patch;

        set_if_present(&mut self.id, id);
        set_if_present(&mut self.first_name, first_name);
        set_if_present(&mut self.last_name, last_name);
        set_if_present(&mut self.email, email);
        set_if_present(&mut self.password, password);
        set_if_present(&mut self.organization, organization);
        set_if_present(&mut self.is_verified, is_verified);
        set_if_present(&mut self.magic_link_token, magic_link_token);
        set_if_present(&mut self.magic_link_expires_at, magic_link_expires_at);
        set_if_present(&mut self.registered_at, registered_at);
        set_if_present(&mut self.last_login_at, last_login_at);
        set_if_present(&mut self.role, role);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_record_normalizes_to_defaults() {
        let ui = UserResponse::default().normalize();

        assert_eq!(ui.id, 0);
        assert_eq!(ui.first_name, "");
        assert_eq!(ui.last_name, "");
        assert_eq!(ui.email, "");
        assert_eq!(ui.password, "");
        assert_eq!(ui.organization, "");
        assert!(!ui.is_verified);
        assert_eq!(ui.magic_link_token, "");
        assert_eq!(ui.magic_link_expires_at, "");
        assert_eq!(ui.registered_at, "");
        assert_eq!(ui.last_login_at, "");
        assert_eq!(ui.role, "");
    }

    #[test]
    fn test_decodes_camel_case_and_treats_null_as_absent() {
        let partial: UserResponse = serde_json::from_value(json!({
            "firstName": "Ada",
            "isVerified": true,
            "magicLinkToken": null,
        }))
        .unwrap();

        assert_eq!(partial.first_name.as_deref(), Some("Ada"));
        assert_eq!(partial.is_verified, Some(true));
        assert_eq!(partial.magic_link_token, None);

        let ui = partial.normalize();
        assert_eq!(ui.first_name, "Ada");
        assert!(ui.is_verified);
        assert_eq!(ui.magic_link_token, "");
    }

    #[test]
    fn test_partial_serialization_omits_absent_fields() {
        let partial = UserResponse {
            id: Some(3),
            role: Some("admin".into()),
            ..Default::default()
        };

        let value = serde_json::to_value(&partial).unwrap();
        assert_eq!(value, json!({ "id": 3, "role": "admin" }));
    }

    #[test]
    fn test_present_values_are_not_trimmed() {
        let partial = UserResponse {
            email: Some("  a@b.com ".into()),
            ..Default::default()
        };
        assert_eq!(partial.normalize().email, "  a@b.com ");
    }
}
