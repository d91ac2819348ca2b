use uuid::Uuid;

use crate::database::models::Employee;
use crate::error::AppError;

/// Pure access decisions. Handlers resolve the acting and target identities
/// first, then ask this policy; the policy itself never looks anything up.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Whether `actor` may view or modify the records of `target_employee_id`.
    /// Privileged actors reach everyone; standard actors only themselves.
    ///
    /// Absent arguments are a wiring bug in the caller, reported as
    /// `InvalidArgument` so they can never be confused with a denial.
    pub fn can_access(
        &self,
        actor: Option<&Employee>,
        target_employee_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let actor = actor.ok_or_else(|| {
            AppError::InvalidArgument("acting employee is required".to_string())
        })?;
        let target_employee_id = target_employee_id.ok_or_else(|| {
            AppError::InvalidArgument("target employee id is required".to_string())
        })?;

        if actor.is_privileged() {
            return Ok(true);
        }

        Ok(actor.id == target_employee_id)
    }

    /// Whether `actor` may view every employee's records at once (directory
    /// listings and the all-employees payroll report).
    pub fn can_access_all(&self, actor: Option<&Employee>) -> Result<bool, AppError> {
        let actor = actor.ok_or_else(|| {
            AppError::InvalidArgument("acting employee is required".to_string())
        })?;

        Ok(actor.is_privileged())
    }
}
