use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{Shift, YearMonth};

#[derive(Clone)]
pub struct ShiftRepository {
    pool: SqlitePool,
}

impl ShiftRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert-or-update by id. Only the close-time fields may change on
    /// update; check-in is fixed when the shift is opened.
    pub async fn save(&self, shift: &Shift) -> Result<Shift, sqlx::Error> {
        sqlx::query_as::<_, Shift>(
            r#"
            INSERT INTO shifts (id, employee_id, check_in, check_out, is_manual, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                check_out = excluded.check_out,
                is_manual = excluded.is_manual,
                updated_at = excluded.updated_at
            RETURNING id, employee_id, check_in, check_out, is_manual, created_at, updated_at
            "#,
        )
        .bind(shift.id)
        .bind(shift.employee_id)
        .bind(shift.check_in)
        .bind(shift.check_out)
        .bind(shift.is_manual)
        .bind(shift.created_at)
        .bind(shift.updated_at)
        .fetch_one(&self.pool)
        .await
    }

    /// Every shift for the employee, most recent first. Creation time breaks
    /// ties between shifts sharing a check-in timestamp.
    pub async fn find_by_employee(&self, employee_id: Uuid) -> Result<Vec<Shift>, sqlx::Error> {
        sqlx::query_as::<_, Shift>(
            "SELECT id, employee_id, check_in, check_out, is_manual, created_at, updated_at
             FROM shifts WHERE employee_id = ?
             ORDER BY check_in DESC, created_at DESC",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Closed shifts whose check-out falls inside the given calendar month,
    /// oldest first. Open shifts never appear here.
    pub async fn find_closed_in_month(
        &self,
        employee_id: Uuid,
        month: YearMonth,
    ) -> Result<Vec<Shift>, sqlx::Error> {
        sqlx::query_as::<_, Shift>(
            "SELECT id, employee_id, check_in, check_out, is_manual, created_at, updated_at
             FROM shifts
             WHERE employee_id = ? AND check_out IS NOT NULL
               AND strftime('%Y-%m', check_out) = ?
             ORDER BY check_in ASC",
        )
        .bind(employee_id)
        .bind(month.to_string())
        .fetch_all(&self.pool)
        .await
    }
}
