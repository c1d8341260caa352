//! Weekly-schedule entity models.
//!
//! A schedule row stores its payload as the serialized JSON string that
//! was validated at write time; the `*View` shapes re-expose it to API
//! callers as a parsed value (lenient read, see `smartplanning_core::payload`).

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use smartplanning_core::payload;
use smartplanning_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `weekly_schedules` table.
#[derive(Debug, Clone, FromRow)]
pub struct WeeklySchedule {
    pub id: DbId,
    pub employee_id: DbId,
    pub week_start: NaiveDate,
    /// Always `week_start + 6` days; derived, never caller-supplied.
    pub week_end: NaiveDate,
    /// Serialized JSON exactly as validated at write time.
    pub schedule_data: String,
    pub total_hours: f64,
    pub status: String,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A schedule row joined with the owning employee's identity fields.
#[derive(Debug, Clone, FromRow)]
pub struct ScheduleWithEmployee {
    pub id: DbId,
    pub employee_id: DbId,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub schedule_data: String,
    pub total_hours: f64,
    pub status: String,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<String>,
    pub department: Option<String>,
}

/// Input for [`WeeklyScheduleRepo::create`](crate::repositories::WeeklyScheduleRepo::create).
///
/// `week_start` is the raw caller-supplied date; the repository resolves
/// it to a calendar date and rejects what it cannot resolve.
#[derive(Debug, Clone)]
pub struct CreateWeeklySchedule {
    pub employee_id: DbId,
    pub week_start: String,
    pub schedule_data: Value,
    pub total_hours: f64,
    pub status: Option<String>,
    pub created_by: DbId,
}

/// Partial update for [`WeeklyScheduleRepo::update`](crate::repositories::WeeklyScheduleRepo::update).
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateWeeklySchedule {
    pub schedule_data: Option<Value>,
    pub total_hours: Option<f64>,
    pub status: Option<String>,
}

/// API-facing shape of a schedule: `schedule_data` as a parsed JSON value.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyScheduleView {
    pub id: DbId,
    pub employee_id: DbId,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub schedule_data: Value,
    pub total_hours: f64,
    pub status: String,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<WeeklySchedule> for WeeklyScheduleView {
    fn from(row: WeeklySchedule) -> Self {
        Self {
            id: row.id,
            employee_id: row.employee_id,
            week_start: row.week_start,
            week_end: row.week_end,
            schedule_data: payload::parse_stored(&row.schedule_data),
            total_hours: row.total_hours,
            status: row.status,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// API-facing shape of a joined schedule read.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleWithEmployeeView {
    pub id: DbId,
    pub employee_id: DbId,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub schedule_data: Value,
    pub total_hours: f64,
    pub status: String,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<String>,
    pub department: Option<String>,
}

impl From<ScheduleWithEmployee> for ScheduleWithEmployeeView {
    fn from(row: ScheduleWithEmployee) -> Self {
        Self {
            id: row.id,
            employee_id: row.employee_id,
            week_start: row.week_start,
            week_end: row.week_end,
            schedule_data: payload::parse_stored(&row.schedule_data),
            total_hours: row.total_hours,
            status: row.status,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
            first_name: row.first_name,
            last_name: row.last_name,
            role: row.role,
            department: row.department,
        }
    }
}
