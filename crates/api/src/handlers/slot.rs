//! # Slot Handlers
//!
//! Request handlers for weekly class slots. Every write goes through the
//! slot manager, so no endpoint can persist a slot without the overlap check.

use academico_core::{
    errors::ScheduleError,
    models::{Slot, SlotFilter, SlotInput, Weekday},
    ordering::TimetableDay,
    validation::ConflictPair,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

/// Query parameters shared by the listing endpoints
///
/// # Fields
///
/// * `subject_id` - Only slots of this subject
/// * `section` - Only slots of this section ("turma")
/// * `weekday` - Only slots on this weekday; English or Portuguese names
#[derive(Debug, Default, Deserialize)]
pub struct SlotQuery {
    pub subject_id: Option<Uuid>,
    pub section: Option<String>,
    pub weekday: Option<String>,
}

impl TryFrom<SlotQuery> for SlotFilter {
    type Error = ScheduleError;

    fn try_from(query: SlotQuery) -> Result<Self, Self::Error> {
        let weekday = query
            .weekday
            .as_deref()
            .filter(|day| !day.trim().is_empty())
            .map(str::parse::<Weekday>)
            .transpose()?;

        Ok(SlotFilter {
            subject_id: query.subject_id,
            section: query.section.filter(|s| !s.trim().is_empty()),
            weekday,
        })
    }
}

/// Lists slots ordered by weekday, then start time
///
/// ```text
/// GET /api/slots?subject_id=<uuid>&section=3A&weekday=monday
/// ```
#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<SlotQuery>, QueryRejection>,
) -> Result<Json<Vec<Slot>>, AppError> {
    let Query(query) = query?;
    let slots = state.manager.list_ordered_slots(query.try_into()?).await?;
    Ok(Json(slots))
}

/// Ordered slots grouped by weekday, for the timetable view
#[axum::debug_handler]
pub async fn weekly_timetable(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<SlotQuery>, QueryRejection>,
) -> Result<Json<Vec<TimetableDay>>, AppError> {
    let Query(query) = query?;
    let days = state.manager.weekly_timetable(query.try_into()?).await?;
    Ok(Json(days))
}

/// Audits stored slots for pairs that already overlap
#[axum::debug_handler]
pub async fn find_conflicts(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<SlotQuery>, QueryRejection>,
) -> Result<Json<Vec<ConflictPair>>, AppError> {
    let Query(query) = query?;
    let pairs = state.manager.find_conflicts(query.try_into()?).await?;
    Ok(Json(pairs))
}

/// Creates a slot after validating it against its scope
///
/// # Errors
///
/// * `400` - Invalid range or malformed fields
/// * `409` - Overlaps an existing slot; the body names the conflicting slot
/// * `500` - Record store failure
#[axum::debug_handler]
pub async fn create_slot(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<SlotInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Slot>), AppError> {
    let Json(input) = payload?;
    let slot = state.manager.create_slot(input).await?;
    Ok((StatusCode::CREATED, Json(slot)))
}

/// Replaces a slot, validating against every other slot in scope
#[axum::debug_handler]
pub async fn update_slot(
    State(state): State<Arc<ApiState>>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<SlotInput>, JsonRejection>,
) -> Result<Json<Slot>, AppError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let slot = state.manager.update_slot(id, input).await?;
    Ok(Json(slot))
}

#[axum::debug_handler]
pub async fn delete_slot(
    State(state): State<Arc<ApiState>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.manager.delete_slot(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
