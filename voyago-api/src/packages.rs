use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use voyago_core::Package;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct PackagesResponse {
    packages: Vec<Package>,
}

#[derive(Debug, Serialize)]
struct PackageResponse {
    package: Package,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateSeatsRequest {
    package_id: u32,
    seats_booked: u32,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/packages", get(list_packages))
        .route("/packages/update-seats", post(update_seats))
        .route("/packages/{destination}", get(package_by_destination))
}

async fn list_packages(State(state): State<AppState>) -> Json<PackagesResponse> {
    let store = state.store.read();
    Json(PackagesResponse {
        packages: store.catalog.list().to_vec(),
    })
}

async fn package_by_destination(
    State(state): State<AppState>,
    Path(destination): Path<String>,
) -> Result<Json<PackageResponse>, ApiError> {
    let store = state.store.read();
    let package = store
        .catalog
        .find_by_destination(&destination)
        .cloned()
        .ok_or(ApiError::PackageNotFound)?;

    Ok(Json(PackageResponse { package }))
}

async fn update_seats(
    State(state): State<AppState>,
    Json(req): Json<UpdateSeatsRequest>,
) -> Result<Json<PackageResponse>, ApiError> {
    let mut store = state.store.write();

    let package = store
        .catalog
        .book_seats(req.package_id, req.seats_booked)
        .map_err(|e| {
            info!("Seat update rejected for package {}: {}", req.package_id, e);
            ApiError::from(e)
        })?
        .clone();

    info!(
        "Package {} down to {} available slots",
        package.package_id, package.available_slots
    );

    Ok(Json(PackageResponse { package }))
}
