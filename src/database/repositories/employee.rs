use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{CreateEmployeeInput, Employee};

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Provisioning entry point; there is no HTTP surface for employee
    /// management, rows arrive through ops tooling and tests.
    pub async fn create(&self, input: CreateEmployeeInput) -> Result<Employee, sqlx::Error> {
        let employee = Employee::new(input);
        sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (id, full_name, email, hourly_rate, work_hours_per_day, role, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, full_name, email, hourly_rate, work_hours_per_day, role, created_at, updated_at
            "#,
        )
        .bind(employee.id)
        .bind(&employee.full_name)
        .bind(&employee.email)
        .bind(employee.hourly_rate)
        .bind(employee.work_hours_per_day)
        .bind(employee.role)
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, full_name, email, hourly_rate, work_hours_per_day, role, created_at, updated_at
             FROM employees WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_all(&self) -> Result<Vec<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, full_name, email, hourly_rate, work_hours_per_day, role, created_at, updated_at
             FROM employees ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
    }
}
