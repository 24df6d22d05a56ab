use common::{EntityKind, Normalize, Patch, set_if_present};
use serde::{Deserialize, Serialize};

/// Event record as received. Fields may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_tz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants_per_evaluator: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Event record with every field populated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventUi {
    #[schema(example = 1)]
    pub id: i32,
    /// Owning user.
    #[schema(example = 1)]
    pub user_id: i32,
    #[schema(example = "Spring Research Showcase")]
    pub name: String,
    pub description: String,
    /// IANA time zone the event is scheduled in.
    #[schema(example = "America/New_York")]
    pub event_tz: String,
    #[schema(example = "2026-04-10T09:00:00Z")]
    pub start_date_time: String,
    #[schema(example = "2026-04-10T17:00:00Z")]
    pub end_date_time: String,
    #[schema(example = "Main Hall")]
    pub location: String,
    pub affiliation: String,
    #[schema(example = "/logos/showcase.png")]
    pub logo_path: String,
    /// Upper bound on submissions handed to one evaluator.
    #[schema(example = 5)]
    pub max_participants_per_evaluator: i32,
    #[schema(example = "2025-09-01T08:00:00Z")]
    pub created_at: String,
}

impl From<EventResponse> for EventUi {
    fn from(r: EventResponse) -> Self {
        Self {
            id: r.id.unwrap_or_default(),
            user_id: r.user_id.unwrap_or_default(),
            name: r.name.unwrap_or_default(),
            description: r.description.unwrap_or_default(),
            event_tz: r.event_tz.unwrap_or_default(),
            start_date_time: r.start_date_time.unwrap_or_default(),
            end_date_time: r.end_date_time.unwrap_or_default(),
            location: r.location.unwrap_or_default(),
            affiliation: r.affiliation.unwrap_or_default(),
            logo_path: r.logo_path.unwrap_or_default(),
            max_participants_per_evaluator: r.max_participants_per_evaluator.unwrap_or_default(),
            created_at: r.created_at.unwrap_or_default(),
        }
    }
}

impl From<EventUi> for EventResponse {
    fn from(u: EventUi) -> Self {
        Self {
            id: Some(u.id),
            user_id: Some(u.user_id),
            name: Some(u.name),
            description: Some(u.description),
            event_tz: Some(u.event_tz),
            start_date_time: Some(u.start_date_time),
            end_date_time: Some(u.end_date_time),
            location: Some(u.location),
            affiliation: Some(u.affiliation),
            logo_path: Some(u.logo_path),
            max_participants_per_evaluator: Some(u.max_participants_per_evaluator),
            created_at: Some(u.created_at),
        }
    }
}

impl Normalize for EventResponse {
    type Complete = EventUi;
    const KIND: EntityKind = EntityKind::Event;
}

impl Patch<EventResponse> for EventUi {
    fn apply(&mut self, patch: EventResponse) {
        let EventResponse {
            id,
            user_id,
            name,
            description,
            event_tz,
            start_date_time,
            end_date_time,
            location,
            affiliation,
            logo_path,
            max_participants_per_evaluator,
            created_at,
        } = patch;

        set_if_present(&mut self.id, id);
        set_if_present(&mut self.user_id, user_id);
        set_if_present(&mut self.name, name);
        set_if_present(&mut self.description, description);
        set_if_present(&mut self.event_tz, event_tz);
        set_if_present(&mut self.start_date_time, start_date_time);
        set_if_present(&mut self.end_date_time, end_date_time);
        set_if_present(&mut self.location, location);
        set_if_present(&mut self.affiliation, affiliation);
        set_if_present(&mut self.logo_path, logo_path);
        set_if_present(&mut self.max_participants_per_evaluator, max_participants_per_evaluator);
        set_if_present(&mut self.created_at, created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EventUi {
        EventUi {
            id: 10,
            user_id: 2,
            name: "Showcase".into(),
            description: "Annual showcase".into(),
            event_tz: "UTC".into(),
            start_date_time: "2026-04-10T09:00:00Z".into(),
            end_date_time: "2026-04-10T17:00:00Z".into(),
            location: "Main Hall".into(),
            affiliation: "Engineering".into(),
            logo_path: "/logos/a.png".into(),
            max_participants_per_evaluator: 5,
            created_at: "2025-09-01T08:00:00Z".into(),
        }
    }

    #[test]
    fn test_patch_overwrites_only_present_fields() {
        let mut ui = sample();
        ui.apply(EventResponse {
            name: Some("Renamed".into()),
            max_participants_per_evaluator: Some(0),
            ..Default::default()
        });

        let mut expected = sample();
        expected.name = "Renamed".into();
        expected.max_participants_per_evaluator = 0;
        assert_eq!(ui, expected);
    }

    #[test]
    fn test_empty_patch_is_a_no_op() {
        let mut ui = sample();
        ui.apply(EventResponse::default());
        assert_eq!(ui, sample());
    }

    #[test]
    fn test_full_patch_equals_normalization() {
        let full = EventResponse::from(sample());
        let mut ui = EventUi::default();
        ui.apply(full.clone());
        assert_eq!(ui, full.normalize());
    }
}
