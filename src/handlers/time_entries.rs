use actix_web::{HttpResponse, web};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::AppState;
use crate::database::models::Shift;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockInResponse {
    pub shift_id: Uuid,
    pub employee_id: Uuid,
    pub check_in: NaiveDateTime,
    pub manual: bool,
}

impl From<Shift> for ClockInResponse {
    fn from(shift: Shift) -> Self {
        Self {
            shift_id: shift.id,
            employee_id: shift.employee_id,
            check_in: shift.check_in,
            manual: shift.is_manual,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockOutResponse {
    pub shift_id: Uuid,
    pub employee_id: Uuid,
    pub check_in: NaiveDateTime,
    pub check_out: Option<NaiveDateTime>,
    pub manual: bool,
}

impl From<Shift> for ClockOutResponse {
    fn from(shift: Shift) -> Self {
        Self {
            shift_id: shift.id,
            employee_id: shift.employee_id,
            check_in: shift.check_in,
            check_out: shift.check_out,
            manual: shift.is_manual,
        }
    }
}

/// Self-service clock-in: the acting identity is the shift owner.
pub async fn clock_in(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();
    let employee = state.directory.get(employee_id).await?;

    if !state
        .access_policy
        .can_access(Some(&employee), Some(employee_id))?
    {
        return Err(AppError::Forbidden(
            "cannot clock in for another employee".to_string(),
        ));
    }

    let shift = state.ledger.open(&employee).await?;

    Ok(ApiResponse::success(ClockInResponse::from(shift)))
}

/// Self-service clock-out of the employee's latest shift.
pub async fn clock_out(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();
    let employee = state.directory.get(employee_id).await?;

    if !state
        .access_policy
        .can_access(Some(&employee), Some(employee_id))?
    {
        return Err(AppError::Forbidden(
            "cannot clock out for another employee".to_string(),
        ));
    }

    let shift = state.ledger.close(&employee, false).await?;

    Ok(ApiResponse::success(ClockOutResponse::from(shift)))
}

/// A privileged actor closes someone else's shift; the result is recorded
/// as a manual closure.
pub async fn clock_out_for_employee(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, AppError> {
    let (actor_id, employee_id) = path.into_inner();
    let actor = state.directory.get(actor_id).await?;
    let employee = state.directory.get(employee_id).await?;

    if !state
        .access_policy
        .can_access(Some(&actor), Some(employee_id))?
    {
        return Err(AppError::Forbidden(
            "cannot close another employee's shift".to_string(),
        ));
    }

    let shift = state.ledger.close(&employee, actor.is_privileged()).await?;

    Ok(ApiResponse::success(ClockOutResponse::from(shift)))
}
