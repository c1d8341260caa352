//! Route definitions for the weekly-schedules resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::weekly_schedule;
use crate::state::AppState;

/// Routes mounted at `/api/weekly-schedules`.
///
/// ```text
/// GET    /                        -> list_all
/// POST   /                        -> create_or_update
/// GET    /week/{week_start}       -> list_by_week
/// GET    /employee/{employee_id}  -> list_by_employee
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(weekly_schedule::list_all).post(weekly_schedule::create_or_update),
        )
        .route("/week/{week_start}", get(weekly_schedule::list_by_week))
        .route(
            "/employee/{employee_id}",
            get(weekly_schedule::list_by_employee),
        )
        .route(
            "/{id}",
            get(weekly_schedule::get_by_id)
                .put(weekly_schedule::update)
                .delete(weekly_schedule::delete),
        )
}
