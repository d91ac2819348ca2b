use actix_web::web;

use crate::handlers::employees;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            .route(
                "/{employee_id}/info",
                web::get().to(employees::get_employee_info),
            )
            .route(
                "/{employee_id}/all-info",
                web::get().to(employees::get_all_employee_info),
            ),
    );
}
