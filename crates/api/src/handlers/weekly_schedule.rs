//! Handlers for the `/weekly-schedules` resource.
//!
//! Request bodies keep every field optional at the serde level and
//! coerce loosely-typed values (numeric strings for ids and hours) in
//! the handler, so missing or malformed fields produce this endpoint's
//! own 400 responses instead of a generic body-rejection. Unknown body
//! fields -- including a caller-supplied `week_end` -- are ignored.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use smartplanning_core::error::CoreError;
use smartplanning_core::types::DbId;
use smartplanning_db::models::weekly_schedule::{
    CreateWeeklySchedule, ScheduleWithEmployeeView, UpdateWeeklySchedule, WeeklyScheduleView,
};
use smartplanning_db::repositories::WeeklyScheduleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::actor::Actor;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// POST body.
#[derive(Debug, Deserialize)]
pub struct CreateScheduleRequest {
    pub employee_id: Option<Value>,
    pub week_start: Option<String>,
    #[serde(default)]
    pub schedule_data: Value,
    pub total_hours: Option<Value>,
    pub status: Option<String>,
}

/// PUT body: any subset of the mutable fields.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateScheduleRequest {
    pub schedule_data: Option<Value>,
    pub total_hours: Option<Value>,
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/weekly-schedules
pub async fn list_all(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ScheduleWithEmployeeView>>> {
    let schedules = WeeklyScheduleRepo::find_all(&state.pool).await?;
    Ok(Json(schedules.into_iter().map(Into::into).collect()))
}

/// GET /api/weekly-schedules/week/{week_start}
///
/// An unresolvable date degrades to an empty list, not an error.
pub async fn list_by_week(
    State(state): State<AppState>,
    Path(week_start): Path<String>,
) -> AppResult<Json<Vec<ScheduleWithEmployeeView>>> {
    let schedules = WeeklyScheduleRepo::find_by_week(&state.pool, &week_start).await?;
    Ok(Json(schedules.into_iter().map(Into::into).collect()))
}

/// GET /api/weekly-schedules/employee/{employee_id}
pub async fn list_by_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<DbId>,
) -> AppResult<Json<Vec<ScheduleWithEmployeeView>>> {
    let schedules = WeeklyScheduleRepo::find_by_employee(&state.pool, employee_id).await?;
    Ok(Json(schedules.into_iter().map(Into::into).collect()))
}

/// GET /api/weekly-schedules/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ScheduleWithEmployeeView>> {
    let schedule = WeeklyScheduleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WeeklySchedule",
            id,
        }))?;
    Ok(Json(schedule.into()))
}

/// POST /api/weekly-schedules
///
/// One schedule per employee per week: a POST for a pair that already
/// has a row becomes an update of that row. The pre-check below only
/// decides the response code (201 created vs 200 updated-in-place); the
/// write itself is keyed on the natural key and updates on conflict, so
/// concurrent POSTs cannot produce two rows.
pub async fn create_or_update(
    State(state): State<AppState>,
    actor: Actor,
    Json(body): Json<CreateScheduleRequest>,
) -> AppResult<(StatusCode, Json<WeeklyScheduleView>)> {
    let (Some(raw_employee_id), Some(week_start)) =
        (body.employee_id.as_ref(), body.week_start.as_deref())
    else {
        return Err(AppError::BadRequest(
            "employee_id and week_start are required".into(),
        ));
    };

    let employee_id = coerce_db_id(raw_employee_id).ok_or_else(|| {
        AppError::Core(CoreError::Validation("employee_id must be an integer".into()))
    })?;

    if actor.is_system_fallback {
        tracing::warn!(
            employee_id,
            week_start,
            actor_id = actor.id,
            "schedule write attributed to the system actor"
        );
    }

    let existing =
        WeeklyScheduleRepo::find_by_employee_and_week(&state.pool, employee_id, week_start)
            .await?;

    let input = CreateWeeklySchedule {
        employee_id,
        week_start: week_start.to_string(),
        schedule_data: body.schedule_data,
        total_hours: coerce_hours(body.total_hours.as_ref()),
        status: body.status,
        created_by: actor.id,
    };
    let schedule = WeeklyScheduleRepo::create(&state.pool, &input).await?;

    let code = if existing.is_some() {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((code, Json(schedule.into())))
}

/// PUT /api/weekly-schedules/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateScheduleRequest>,
) -> AppResult<Json<WeeklyScheduleView>> {
    let input = UpdateWeeklySchedule {
        schedule_data: body.schedule_data,
        total_hours: body.total_hours.as_ref().map(|v| coerce_hours(Some(v))),
        status: body.status,
    };
    let schedule = WeeklyScheduleRepo::update(&state.pool, id, &input).await?;
    Ok(Json(schedule.into()))
}

/// DELETE /api/weekly-schedules/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Value>> {
    // The store's delete is idempotent; the 404 contract for unknown ids
    // lives here.
    WeeklyScheduleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WeeklySchedule",
            id,
        }))?;
    WeeklyScheduleRepo::delete(&state.pool, id).await?;
    Ok(Json(json!({ "message": "Weekly schedule deleted" })))
}

// ---------------------------------------------------------------------------
// Coercion helpers
// ---------------------------------------------------------------------------

/// Accept an integer id as a JSON number or a numeric string.
fn coerce_db_id(value: &Value) -> Option<DbId> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerce an hours value to a float; absent or non-numeric becomes 0.
fn coerce_hours(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
