//! Reservation API Handlers
//!
//! Successful mutations return the affected record; refreshing any list view
//! is the caller's explicit responsibility. Error bodies carry a message the
//! booking form shows verbatim, so the user can correct and resubmit.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::services::{ReservationFilter, filter_reservations};
use crate::utils::AppResult;
use shared::models::{Reservation, ReservationDraft};

/// GET /api/reservations - 预订列表 (可选日期/时间范围过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<ReservationFilter>,
) -> AppResult<Json<Vec<Reservation>>> {
    let all = state.booking().list()?;
    if filter.is_empty() {
        return Ok(Json(all));
    }
    Ok(Json(filter_reservations(&all, &filter)))
}

/// GET /api/reservations/:id - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.booking().get(id)?;
    Ok(Json(reservation))
}

/// POST /api/reservations - 创建预订
pub async fn create(
    State(state): State<ServerState>,
    Json(draft): Json<ReservationDraft>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let reservation = state.booking().create(draft)?;
    tracing::info!(id = reservation.id, table_id = reservation.table_id,
        date = %reservation.date, time = %reservation.time, "Reservation created");
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// PUT /api/reservations/:id - 更新预订
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(draft): Json<ReservationDraft>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.booking().update(id, draft)?;
    tracing::info!(id, "Reservation updated");
    Ok(Json(reservation))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    message: String,
}

/// DELETE /api/reservations/:id - 删除预订
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<DeleteResponse>> {
    state.booking().remove(id)?;
    tracing::info!(id, "Reservation deleted");
    Ok(Json(DeleteResponse {
        message: "Reservation deleted successfully".to_string(),
    }))
}
