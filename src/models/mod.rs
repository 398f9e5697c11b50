pub mod event;

pub use event::{Category, Event, EventDraft, RsvpRequest};
