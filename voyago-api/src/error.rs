use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use voyago_core::CatalogError;

/// Failures a handler can surface. The core only returns structured signals;
/// the user-facing text lives here.
#[derive(Debug)]
pub enum ApiError {
    PackageNotFound,
    SeatUpdateRejected,
    NoBookingsForPackage,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::PackageNotFound => (StatusCode::NOT_FOUND, "Package not found."),
            ApiError::SeatUpdateRejected => (
                StatusCode::BAD_REQUEST,
                "Not enough slots available or package not found.",
            ),
            ApiError::NoBookingsForPackage => (
                StatusCode::NOT_FOUND,
                "No bookings found for this package.",
            ),
        };

        (status, message).into_response()
    }
}

impl From<CatalogError> for ApiError {
    // The seat update route reports both misses and over-booking the same way
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::PackageNotFound(_) | CatalogError::InsufficientSlots { .. } => {
                ApiError::SeatUpdateRejected
            }
        }
    }
}
