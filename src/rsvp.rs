//! Pure attendee-list transitions for RSVP actions.
//!
//! The functions here only compute the next state of an [`Event`]; persisting
//! the result is the store's job. On any failure the event is left untouched.

use thiserror::Error;

use crate::models::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpAction {
    Rsvp,
    Cancel,
}

impl RsvpAction {
    /// Parses the wire value of the `action` field.
    pub fn parse(value: &str) -> Result<Self, RsvpError> {
        match value {
            "rsvp" => Ok(RsvpAction::Rsvp),
            "cancel" => Ok(RsvpAction::Cancel),
            _ => Err(RsvpError::InvalidAction),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RsvpError {
    #[error("You have already RSVPed to this event")]
    AlreadyRsvped,
    #[error("Event is at maximum capacity")]
    CapacityExceeded,
    #[error("You have not RSVPed to this event")]
    NotRsvped,
    #[error("Invalid action. Use 'rsvp' or 'cancel'")]
    InvalidAction,
}

/// Applies an RSVP transition for `user_id` to `event`.
pub fn apply(event: &mut Event, user_id: &str, action: RsvpAction) -> Result<(), RsvpError> {
    let attending = event.attendees.iter().any(|id| id == user_id);

    match action {
        RsvpAction::Rsvp => {
            if attending {
                return Err(RsvpError::AlreadyRsvped);
            }
            if let Some(max) = event.max_attendees {
                if event.attendee_count >= max {
                    return Err(RsvpError::CapacityExceeded);
                }
            }
            event.attendees.push(user_id.to_string());
            event.attendee_count += 1;
        }
        RsvpAction::Cancel => {
            if !attending {
                return Err(RsvpError::NotRsvped);
            }
            event.attendees.retain(|id| id != user_id);
            // Floored at zero; a consistent attendee list never reaches it.
            event.attendee_count = event.attendee_count.saturating_sub(1);
        }
    }

    Ok(())
}
