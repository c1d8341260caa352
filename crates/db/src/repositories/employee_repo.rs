//! Repository for the externally-owned `employees` table.
//!
//! Schedule reads join against this table; inserts exist so integration
//! tests can seed the rows those joins need.

use sqlx::PgPool;

use smartplanning_core::types::DbId;

use crate::models::employee::{CreateEmployee, Employee};

/// Column list shared across queries.
const COLUMNS: &str = "id, first_name, last_name, email, role, department, \
    contract_hours, created_at, updated_at";

/// Minimal operations over employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees
                (first_name, last_name, email, role, department, contract_hours)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.role)
            .bind(&input.department)
            .bind(input.contract_hours)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
