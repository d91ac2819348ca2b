use actix_web::web;

use crate::handlers::reports;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/{employee_id}/payment", web::get().to(reports::get_payment))
            .route(
                "/{employee_id}/payment-all",
                web::get().to(reports::get_payment_all),
            ),
    );
}
