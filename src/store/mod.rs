//! The authoritative in-memory collection of events.
//!
//! State lives for the lifetime of the serving process and is lost on
//! restart. Handles are cheap clones over shared state; RSVP transitions run
//! under the write lock so concurrent requests cannot race a capacity check.

pub mod seed;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Event, EventDraft};
use crate::rsvp::{self, RsvpAction};
use crate::utils::error::AppError;

/// Optional predicates for [`EventStore::list`].
///
/// `category` is matched verbatim against the event's category name; the
/// "All" sentinel is resolved to `None` at the HTTP boundary, and an unknown
/// category simply matches nothing.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl EventFilter {
    fn matches(&self, event: &Event) -> bool {
        if let Some(search) = &self.search {
            if !event
                .title
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if event.category.as_str() != category {
                return false;
            }
        }
        true
    }
}

#[derive(Clone, Default)]
pub struct EventStore {
    events: Arc<RwLock<Vec<Event>>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the given events, newest first.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Arc::new(RwLock::new(events)),
        }
    }

    /// Events matching `filter`, most recently created first.
    pub async fn list(&self, filter: &EventFilter) -> Vec<Event> {
        let events = self.events.read().await;
        events
            .iter()
            .filter(|event| filter.matches(event))
            .cloned()
            .collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Event> {
        let events = self.events.read().await;
        events.iter().find(|event| event.id == id).cloned()
    }

    /// Validates the draft, fills store defaults and inserts at the head.
    pub async fn create(&self, draft: EventDraft) -> Result<Event, AppError> {
        let missing = draft.missing_required_fields();
        if !missing.is_empty() {
            return Err(AppError::ValidationError(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let event = draft.into_event();
        let mut events = self.events.write().await;
        events.insert(0, event.clone());
        Ok(event)
    }

    /// Replaces the stored event wholesale. The addressed id wins over
    /// whatever id the replacement record carries.
    pub async fn update(&self, id: &str, mut replacement: Event) -> Result<Event, AppError> {
        replacement.id = id.to_string();
        let mut events = self.events.write().await;
        let slot = events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
        *slot = replacement.clone();
        Ok(replacement)
    }

    /// Removes and returns the event.
    pub async fn delete(&self, id: &str) -> Result<Event, AppError> {
        let mut events = self.events.write().await;
        let index = events
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
        Ok(events.remove(index))
    }

    /// Events owned by `user_id`, in store order.
    pub async fn list_by_owner(&self, user_id: &str) -> Vec<Event> {
        let events = self.events.read().await;
        events
            .iter()
            .filter(|event| event.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect()
    }

    /// Applies an RSVP transition and persists the result in one critical
    /// section, so two requests for the last open seat cannot both pass the
    /// capacity check.
    pub async fn rsvp(
        &self,
        event_id: &str,
        user_id: &str,
        action: RsvpAction,
    ) -> Result<Event, AppError> {
        let mut events = self.events.write().await;
        let event = events
            .iter_mut()
            .find(|event| event.id == event_id)
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
        rsvp::apply(event, user_id, action)?;
        Ok(event.clone())
    }
}
