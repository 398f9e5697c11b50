use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A schedulable item users can RSVP to.
///
/// `attendee_count` mirrors `attendees.len()`; the RSVP engine keeps the two
/// in step and the store never re-derives one from the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub attendee_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Conference,
    Workshop,
    Meetup,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Conference => "Conference",
            Category::Workshop => "Workshop",
            Category::Meetup => "Meetup",
        }
    }
}

/// Incoming payload for event creation.
///
/// Every field is optional at the type level so the store can reject missing
/// required fields as a 400 validation failure with a readable message,
/// instead of serde bouncing the body before it reaches application code.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub category: Option<Category>,
    pub user_id: Option<String>,
    pub attendee_count: Option<u32>,
    pub max_attendees: Option<u32>,
    pub attendees: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl EventDraft {
    /// Fields the creation endpoint refuses to default.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.as_deref().map_or(true, str::is_empty) {
            missing.push("title");
        }
        if self.description.as_deref().map_or(true, str::is_empty) {
            missing.push("description");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if self.location.as_deref().map_or(true, str::is_empty) {
            missing.push("location");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        missing
    }

    /// Materializes the draft, assigning store defaults for absent fields.
    pub fn into_event(self) -> Event {
        let attendees = self.attendees.unwrap_or_default();
        let attendee_count = self.attendee_count.unwrap_or(attendees.len() as u32);
        Event {
            id: self
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            category: self.category.unwrap_or(Category::Meetup),
            user_id: self.user_id,
            attendee_count,
            max_attendees: self.max_attendees,
            attendees,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Body of `PUT /events/:id/rsvp`.
///
/// `action` stays a plain string on the wire; unknown values are reported as
/// a validation failure rather than a deserialization error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpRequest {
    pub user_id: Option<String>,
    pub action: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_serializes_with_camel_case_wire_names() {
        let event = EventDraft {
            title: Some("Rust Meetup".into()),
            description: Some("Monthly get-together".into()),
            date: Some(NaiveDate::from_ymd_opt(2026, 9, 12).unwrap()),
            location: Some("Berlin".into()),
            category: Some(Category::Meetup),
            max_attendees: Some(40),
            ..Default::default()
        }
        .into_event();

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["category"], "Meetup");
        assert_eq!(value["attendeeCount"], 0);
        assert_eq!(value["maxAttendees"], 40);
        assert_eq!(value["date"], "2026-09-12");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("userId").is_none());
    }

    #[test]
    fn draft_reports_missing_and_empty_required_fields() {
        let draft = EventDraft {
            title: Some(String::new()),
            description: Some("long enough description".into()),
            ..Default::default()
        };
        assert_eq!(
            draft.missing_required_fields(),
            vec!["title", "date", "location", "category"]
        );
    }

    #[test]
    fn draft_defaults_are_assigned_on_materialization() {
        let draft: EventDraft = serde_json::from_value(json!({
            "title": "Tech Summit",
            "description": "A summit about technology",
            "date": "2026-11-01",
            "location": "Lisbon",
            "category": "Conference"
        }))
        .unwrap();
        assert!(draft.missing_required_fields().is_empty());

        let event = draft.into_event();
        assert!(!event.id.is_empty());
        assert_eq!(event.attendee_count, 0);
        assert!(event.attendees.is_empty());
        assert_eq!(event.max_attendees, None);
    }

    #[test]
    fn supplied_id_and_attendees_are_kept() {
        let draft: EventDraft = serde_json::from_value(json!({
            "id": "evt-7",
            "title": "Workshop",
            "description": "Hands-on session",
            "date": "2026-10-02",
            "location": "Remote",
            "category": "Workshop",
            "attendees": ["user1", "user2"],
            "attendeeCount": 2
        }))
        .unwrap();

        let event = draft.into_event();
        assert_eq!(event.id, "evt-7");
        assert_eq!(event.attendees, vec!["user1", "user2"]);
        assert_eq!(event.attendee_count, 2);
    }
}
