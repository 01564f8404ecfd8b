use axum::{routing::get, Router};

use crate::handlers::{bookings, health};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index).post(bookings::create))
        .route("/health", get(health::health))
        .route("/bookings", get(bookings::list_bookings))
        .route(
            "/bookings/{id}",
            get(bookings::get_booking)
                .put(bookings::update_booking)
                .delete(bookings::delete_booking),
        )
        .route("/search/bookings", get(bookings::search_bookings))
        .with_state(state)
}
