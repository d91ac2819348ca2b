use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::AppState;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

pub async fn get_employee_info(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let employee = state.directory.get(path.into_inner()).await?;

    Ok(ApiResponse::success(employee))
}

/// Every employee's record; directory-wide reads are privileged-only.
pub async fn get_all_employee_info(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let actor = state.directory.get(path.into_inner()).await?;

    if !state.access_policy.can_access_all(Some(&actor))? {
        return Err(AppError::Forbidden(
            "employee directory is restricted".to_string(),
        ));
    }

    let employees = state.directory.list_all().await?;

    Ok(ApiResponse::success(employees))
}
