//! Admin moderation endpoints
//!
//! Listing and deciding reservations. Every route here requires the
//! static bearer token from the configuration; the decision endpoints
//! send the matching customer notice after the status is persisted.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap};
use axum::Json;
use mesa_core::{admin_order, MesaError, Reservation, ReservationFilter};
use mesa_store::SqliteRepo;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Query parameters for the admin listing
#[derive(Debug, Deserialize)]
pub struct AdminListQuery {
    status: Option<String>,
    search: Option<String>,
}

/// Body of the reject endpoint; the reason is optional
#[derive(Debug, Deserialize, Default)]
pub struct RejectBody {
    #[serde(default)]
    reason: Option<String>,
}

/// Check the `Authorization: Bearer <token>` header against the config
fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match token {
        Some(t) if t == state.config.admin_token => Ok(()),
        _ => Err(ApiError::Unauthorized),
    }
}

/// GET /admin/reservations?status=&search=
///
/// Moderation queue: pending first, then newest first. Optional status
/// filter and free-text search over name, email and phone.
pub async fn list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<AdminListQuery>,
) -> Result<Json<Vec<Reservation>>, ApiError> {
    authorize(&state, &headers)?;

    let status = params
        .status
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(ApiError::from)?;
    let filter = ReservationFilter {
        status,
        search: params.search,
    };

    let mut reservations = state.with_conn(SqliteRepo::list_all)?;
    reservations.retain(|r| filter.matches(r));
    admin_order(&mut reservations);

    Ok(Json(reservations))
}

/// POST /admin/reservations/:id/approve
pub async fn approve(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Reservation>, ApiError> {
    authorize(&state, &headers)?;

    let reservation = state.with_conn(|conn| {
        let mut reservation = SqliteRepo::get(conn, &id)?
            .ok_or_else(|| MesaError::ReservationNotFound { id: id.clone() })?;
        reservation.approve()?;
        SqliteRepo::update_status(conn, &reservation.id, reservation.status, None)?;
        Ok(reservation)
    })?;
    info!(id = %reservation.id, "reservation approved");

    notify_decision(&state, &reservation).await;
    Ok(Json(reservation))
}

/// POST /admin/reservations/:id/reject
///
/// An empty or missing reason falls back to the standard rejection text.
pub async fn reject(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Option<Json<RejectBody>>,
) -> Result<Json<Reservation>, ApiError> {
    authorize(&state, &headers)?;
    let Json(body) = body.unwrap_or_default();

    let reservation = state.with_conn(|conn| {
        let mut reservation = SqliteRepo::get(conn, &id)?
            .ok_or_else(|| MesaError::ReservationNotFound { id: id.clone() })?;
        reservation.reject(body.reason)?;
        SqliteRepo::update_status(
            conn,
            &reservation.id,
            reservation.status,
            reservation.rejection_reason.as_deref(),
        )?;
        Ok(reservation)
    })?;
    info!(id = %reservation.id, "reservation rejected");

    notify_decision(&state, &reservation).await;
    Ok(Json(reservation))
}

/// Send the decision email, logging instead of failing the request
async fn notify_decision(state: &AppState, reservation: &Reservation) {
    if let Err(e) = state.notifier.reservation_decided(reservation).await {
        warn!(id = %reservation.id, error = %e, "decision email failed; status is persisted");
    }
}
