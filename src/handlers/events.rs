use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::models::{Event, EventDraft, RsvpRequest};
use crate::rsvp::RsvpAction;
use crate::store::{EventFilter, EventStore};
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl ListEventsQuery {
    /// "All" (and the empty string) are the client's "no filter" sentinels.
    fn into_filter(self) -> EventFilter {
        EventFilter {
            search: self.search.filter(|s| !s.is_empty()),
            category: self
                .category
                .filter(|c| !c.is_empty() && c.as_str() != "All"),
        }
    }
}

pub async fn list_events(
    State(store): State<EventStore>,
    Query(query): Query<ListEventsQuery>,
) -> Response {
    let events = store.list(&query.into_filter()).await;
    success(events, "Events retrieved successfully")
}

pub async fn get_event(
    State(store): State<EventStore>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let event = store
        .get_by_id(&id)
        .await
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
    Ok(success(event, "Event retrieved successfully"))
}

pub async fn create_event(
    State(store): State<EventStore>,
    Json(draft): Json<EventDraft>,
) -> Result<Response, AppError> {
    let event = store.create(draft).await?;
    info!(event_id = %event.id, title = %event.title, "Event created");
    Ok(created(event, "Event created successfully"))
}

pub async fn update_event(
    State(store): State<EventStore>,
    Path(id): Path<String>,
    Json(replacement): Json<Event>,
) -> Result<Response, AppError> {
    let event = store.update(&id, replacement).await?;
    Ok(success(event, "Event updated successfully"))
}

pub async fn delete_event(
    State(store): State<EventStore>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let event = store.delete(&id).await?;
    info!(event_id = %event.id, "Event deleted");
    Ok(success(event, "Event deleted successfully"))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyEventsQuery {
    pub user_id: Option<String>,
}

pub async fn my_events(
    State(store): State<EventStore>,
    Query(query): Query<MyEventsQuery>,
) -> Result<Response, AppError> {
    let user_id = query
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::ValidationError("User ID is required".to_string()))?;
    let events = store.list_by_owner(&user_id).await;
    Ok(success(events, "User events retrieved successfully"))
}

pub async fn rsvp_event(
    State(store): State<EventStore>,
    Path(id): Path<String>,
    Json(request): Json<RsvpRequest>,
) -> Result<Response, AppError> {
    let user_id = request
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::ValidationError("User ID is required".to_string()))?;
    let action = RsvpAction::parse(request.action.as_deref().unwrap_or_default())?;

    let event = store.rsvp(&id, &user_id, action).await?;
    info!(event_id = %id, user_id = %user_id, ?action, "RSVP transition applied");

    let message = match action {
        RsvpAction::Rsvp => "Successfully RSVPed to the event",
        RsvpAction::Cancel => "Successfully cancelled RSVP",
    };
    Ok(success(event, message))
}
