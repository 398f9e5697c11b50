use axum::routing::{get, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::{apply_security_headers, create_cors_layer, hsts_enabled_from_env};
use crate::handlers::events::{
    create_event, delete_event, get_event, list_events, my_events, rsvp_event, update_event,
};
use crate::handlers::health_check;
use crate::store::EventStore;

pub fn create_routes(store: EventStore) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/:id",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/events/:id/rsvp", put(rsvp_event))
        .route("/my-events", get(my_events))
        .with_state(store)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer());

    apply_security_headers(router, hsts_enabled_from_env())
}
