use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::AppState;
use crate::database::models::YearMonth;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// Calendar month as `YYYY-MM`; absent or empty means the current month.
    pub month: Option<String>,
}

fn resolve_month(query: &ReportQuery) -> Result<YearMonth, AppError> {
    match query.month.as_deref() {
        None | Some("") => Ok(YearMonth::current()),
        Some(raw) => raw.parse().map_err(AppError::InvalidArgument),
    }
}

/// Payroll breakdown for one employee over one month.
pub async fn get_payment(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<ReportQuery>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();
    let employee = state.directory.get(employee_id).await?;

    if !state
        .access_policy
        .can_access(Some(&employee), Some(employee_id))?
    {
        return Err(AppError::Forbidden(
            "payroll reports are restricted".to_string(),
        ));
    }

    let month = resolve_month(&query)?;
    let breakdown = state.payroll.compute_for_month(&employee, month).await?;

    Ok(ApiResponse::success_with_message(
        breakdown,
        &format!("Payroll report for {}", month),
    ))
}

/// Payroll breakdowns for every employee; privileged-only.
pub async fn get_payment_all(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<ReportQuery>,
) -> Result<HttpResponse, AppError> {
    let actor = state.directory.get(path.into_inner()).await?;

    if !state.access_policy.can_access_all(Some(&actor))? {
        return Err(AppError::Forbidden(
            "payroll reports for all employees are restricted".to_string(),
        ));
    }

    let month = resolve_month(&query)?;
    let employees = state.directory.list_all().await?;
    let breakdowns = state
        .payroll
        .compute_for_month_batch(&employees, month)
        .await?;

    Ok(ApiResponse::success_with_message(
        breakdowns,
        &format!("Payroll report for {}", month),
    ))
}
