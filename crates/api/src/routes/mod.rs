pub mod health;
pub mod weekly_schedule;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /weekly-schedules                          list, create-or-update
/// /weekly-schedules/week/{week_start}        schedules for one week
/// /weekly-schedules/employee/{employee_id}   schedules for one employee
/// /weekly-schedules/{id}                     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/weekly-schedules", weekly_schedule::router())
}
