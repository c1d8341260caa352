//! Employee entity model.
//!
//! Employees are owned by an external system; this crate only reads the
//! identity fields that schedule queries join against, and inserts rows
//! for test seeding.

use smartplanning_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `employees` table.
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub contract_hours: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for seeding an employee.
#[derive(Debug, Clone)]
pub struct CreateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub contract_hours: Option<f64>,
}
