//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::services::SlotQuery;
use crate::utils::{AppError, AppResult};
use shared::models::DiningTable;

/// Availability query parameters
///
/// `partySize` and `excludeReservationId` are taken as raw strings and
/// parsed leniently: a non-numeric or non-positive value means
/// "unspecified" rather than a rejected request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityParams {
    pub date: Option<String>,
    pub time: Option<String>,
    pub party_size: Option<String>,
    pub exclude_reservation_id: Option<String>,
}

/// GET /api/tables - 查询空桌
///
/// 提供 `date` 和 `time` 时返回该时段可用的桌台；都缺省时返回完整目录。
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<AvailabilityParams>,
) -> AppResult<Json<Vec<DiningTable>>> {
    let date = params.date.as_deref().map(str::trim).unwrap_or("");
    let time = params.time.as_deref().map(str::trim).unwrap_or("");

    // No slot at all: return the whole catalog, as the original API did
    if date.is_empty() && time.is_empty() {
        return Ok(Json(state.catalog.all().to_vec()));
    }

    let query = SlotQuery {
        date: date.to_string(),
        time: time.to_string(),
        party_size: parse_lenient(&params.party_size),
        exclude_reservation: parse_lenient(&params.exclude_reservation_id),
    };
    let tables = state.availability().resolve(&query)?;
    Ok(Json(tables))
}

/// GET /api/tables/:id - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
) -> AppResult<Json<DiningTable>> {
    let table = state
        .catalog
        .by_id(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", id)))?;
    Ok(Json(table))
}

fn parse_lenient<T: std::str::FromStr + PartialOrd + Default>(value: &Option<String>) -> Option<T> {
    value
        .as_deref()
        .and_then(|v| v.trim().parse::<T>().ok())
        .filter(|v| *v > T::default())
}
