use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::info;
use voyago_core::{Booking, NewBooking};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct BookingResponse {
    booking: Booking,
}

#[derive(Debug, Serialize)]
struct BookingsResponse {
    bookings: Vec<Booking>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(create_booking))
        .route("/bookings/{package_id}", get(bookings_by_package))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<NewBooking>,
) -> (StatusCode, Json<BookingResponse>) {
    let mut store = state.store.write();
    let booking = store.ledger.add(req);

    info!(
        "Booking {} created for package {}",
        booking.booking_id, booking.package_id
    );

    (StatusCode::CREATED, Json(BookingResponse { booking }))
}

async fn bookings_by_package(
    State(state): State<AppState>,
    Path(package_id): Path<u32>,
) -> Result<Json<BookingsResponse>, ApiError> {
    let store = state.store.read();
    let bookings = store.ledger.for_package(package_id);

    if bookings.is_empty() {
        return Err(ApiError::NoBookingsForPackage);
    }

    Ok(Json(BookingsResponse { bookings }))
}
