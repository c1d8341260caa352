//! Repository for the `weekly_schedules` table.
//!
//! Week-boundary and payload normalization happen at this boundary:
//! callers hand in raw date strings and JSON values, rows leave with a
//! resolved Monday anchor, a derived end date, and a validated payload.

use sqlx::PgPool;

use smartplanning_core::dates;
use smartplanning_core::error::CoreError;
use smartplanning_core::payload;
use smartplanning_core::types::DbId;

use crate::error::StoreError;
use crate::models::weekly_schedule::{
    CreateWeeklySchedule, ScheduleWithEmployee, UpdateWeeklySchedule, WeeklySchedule,
};

/// Column list shared across single-table queries.
const COLUMNS: &str = "id, employee_id, week_start, week_end, schedule_data, \
    total_hours, status, created_by, created_at, updated_at";

/// Column list for reads joined against `employees`.
const JOINED_COLUMNS: &str = "ws.id, ws.employee_id, ws.week_start, ws.week_end, \
    ws.schedule_data, ws.total_hours, ws.status, ws.created_by, ws.created_at, \
    ws.updated_at, e.first_name, e.last_name, e.role, e.department";

/// Status assigned to schedules created without one.
const DEFAULT_STATUS: &str = "draft";

/// Provides CRUD operations for weekly schedules.
///
/// At most one schedule exists per (employee, week). `create` is keyed on
/// that natural key and updates in place on conflict, so the invariant
/// holds under concurrent writers without a pre-check.
pub struct WeeklyScheduleRepo;

impl WeeklyScheduleRepo {
    /// Create a schedule, or update the existing row for the same
    /// employee and week.
    ///
    /// Resolves `week_start` (rejecting what the normalizer cannot),
    /// derives `week_end` as `week_start + 6` days, and validates the
    /// payload before touching the database. `status` defaults to
    /// `draft`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateWeeklySchedule,
    ) -> Result<WeeklySchedule, StoreError> {
        let week_start = dates::normalize_calendar_date(&input.week_start).ok_or_else(|| {
            CoreError::Validation(format!(
                "week_start is not a resolvable date: {:?}",
                input.week_start
            ))
        })?;
        let week_end = dates::week_end(week_start);
        let schedule_data = payload::validate_for_storage(&input.schedule_data)?;
        let status = input.status.as_deref().unwrap_or(DEFAULT_STATUS);

        let query = format!(
            "INSERT INTO weekly_schedules
                (employee_id, week_start, week_end, schedule_data, total_hours, status, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT ON CONSTRAINT uq_weekly_schedules_employee_week
             DO UPDATE SET
                week_end = EXCLUDED.week_end,
                schedule_data = EXCLUDED.schedule_data,
                total_hours = EXCLUDED.total_hours,
                status = EXCLUDED.status,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, WeeklySchedule>(&query)
            .bind(input.employee_id)
            .bind(week_start)
            .bind(week_end)
            .bind(&schedule_data)
            .bind(input.total_hours)
            .bind(status)
            .bind(input.created_by)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// List every schedule with employee identity fields, newest week
    /// first, employees alphabetically within a week.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<ScheduleWithEmployee>, StoreError> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM weekly_schedules ws
             JOIN employees e ON e.id = ws.employee_id
             ORDER BY ws.week_start DESC, e.last_name ASC"
        );
        let rows = sqlx::query_as::<_, ScheduleWithEmployee>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Find one schedule (joined with employee fields) by its id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ScheduleWithEmployee>, StoreError> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM weekly_schedules ws
             JOIN employees e ON e.id = ws.employee_id
             WHERE ws.id = $1"
        );
        let row = sqlx::query_as::<_, ScheduleWithEmployee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// List the schedules for one week, matching by calendar date only.
    ///
    /// An unresolvable `raw_week` degrades to an empty list rather than
    /// an error; the rejection is logged.
    pub async fn find_by_week(
        pool: &PgPool,
        raw_week: &str,
    ) -> Result<Vec<ScheduleWithEmployee>, StoreError> {
        let Some(week_start) = dates::normalize_calendar_date(raw_week) else {
            tracing::warn!(raw_week, "unresolvable week date in lookup, returning no schedules");
            return Ok(Vec::new());
        };

        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM weekly_schedules ws
             JOIN employees e ON e.id = ws.employee_id
             WHERE ws.week_start = $1
             ORDER BY e.last_name ASC"
        );
        let rows = sqlx::query_as::<_, ScheduleWithEmployee>(&query)
            .bind(week_start)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// List all schedules for one employee, newest week first.
    pub async fn find_by_employee(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Vec<ScheduleWithEmployee>, StoreError> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM weekly_schedules ws
             JOIN employees e ON e.id = ws.employee_id
             WHERE ws.employee_id = $1
             ORDER BY ws.week_start DESC"
        );
        let rows = sqlx::query_as::<_, ScheduleWithEmployee>(&query)
            .bind(employee_id)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Find the single schedule for an (employee, week) pair.
    ///
    /// Returns `None` when the date cannot be resolved or no row matches;
    /// this lookup never raises for bad input.
    pub async fn find_by_employee_and_week(
        pool: &PgPool,
        employee_id: DbId,
        raw_week: &str,
    ) -> Result<Option<WeeklySchedule>, StoreError> {
        let Some(week_start) = dates::normalize_calendar_date(raw_week) else {
            tracing::warn!(
                employee_id,
                raw_week,
                "unresolvable week date in lookup, treating as no match"
            );
            return Ok(None);
        };

        let query = format!(
            "SELECT {COLUMNS} FROM weekly_schedules
             WHERE employee_id = $1 AND week_start = $2"
        );
        let row = sqlx::query_as::<_, WeeklySchedule>(&query)
            .bind(employee_id)
            .bind(week_start)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Apply a partial update. Only non-`None` fields change, but
    /// `updated_at` is refreshed unconditionally, even for an empty
    /// update.
    ///
    /// A supplied payload is re-validated under the same rules as
    /// `create`. Fails with `NotFound` when no row has the given id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWeeklySchedule,
    ) -> Result<WeeklySchedule, StoreError> {
        let schedule_data = match &input.schedule_data {
            Some(value) => Some(payload::validate_for_storage(value)?),
            None => None,
        };

        let query = format!(
            "UPDATE weekly_schedules SET
                schedule_data = COALESCE($2, schedule_data),
                total_hours = COALESCE($3, total_hours),
                status = COALESCE($4, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WeeklySchedule>(&query)
            .bind(id)
            .bind(schedule_data)
            .bind(input.total_hours)
            .bind(input.status.as_deref())
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "WeeklySchedule",
                    id,
                }
                .into()
            })
    }

    /// Hard-delete a schedule by id.
    ///
    /// Idempotent: deleting an id that does not exist is still a success,
    /// because the desired end state (no such row) already holds.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM weekly_schedules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!(id, "delete of absent weekly schedule treated as success");
        }
        Ok(true)
    }
}
