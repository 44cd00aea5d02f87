//! Public reservation endpoints
//!
//! Creation and customer lookup. These are the endpoints the website
//! calls; no authentication, validation errors come back as 400.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use mesa_core::{MesaError, Reservation, ReservationRequest};
use mesa_store::SqliteRepo;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Query parameters for the customer lookup endpoint
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    email: Option<String>,
}

/// POST /reservations
///
/// Validates the request, stores the reservation as pending, then sends
/// the operator notification and the customer acknowledgement. Email
/// failures are logged and swallowed: the stored record is what counts.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReservationRequest>,
) -> Result<(StatusCode, Json<Reservation>), ApiError> {
    let reservation = Reservation::from_request(request, Utc::now().date_naive())?;

    state.with_conn(|conn| SqliteRepo::insert(conn, &reservation))?;
    info!(id = %reservation.id, date = %reservation.date, time = %reservation.time, "reservation created");

    if let Err(e) = state.notifier.reservation_created(&reservation).await {
        warn!(id = %reservation.id, error = %e, "reservation emails failed; record is stored");
    }

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /reservations?email=
///
/// Customer status lookup: all reservations for an email, newest first.
/// The email parameter is required.
pub async fn lookup(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LookupQuery>,
) -> Result<Json<Vec<Reservation>>, ApiError> {
    let email = params
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or(MesaError::MissingField { field: "email" })?
        .to_string();

    let reservations = state.with_conn(|conn| SqliteRepo::list_by_email(conn, &email))?;
    Ok(Json(reservations))
}

/// GET /reservations/:id
pub async fn get_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Reservation>, ApiError> {
    let reservation = state
        .with_conn(|conn| SqliteRepo::get(conn, &id))?
        .ok_or(MesaError::ReservationNotFound { id })?;
    Ok(Json(reservation))
}
