use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One work session. `check_out` stays `None` while the employee is still
/// clocked in; `is_manual` marks sessions opened or closed by a privileged
/// actor instead of plain self-service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub check_in: NaiveDateTime,
    pub check_out: Option<NaiveDateTime>,
    pub is_manual: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Shift {
    pub fn open_now(employee_id: Uuid, is_manual: bool) -> Self {
        let now = chrono::Local::now().naive_local();
        Self {
            id: Uuid::new_v4(),
            employee_id,
            check_in: now,
            check_out: None,
            is_manual,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }
}
