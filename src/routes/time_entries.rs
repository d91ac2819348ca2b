use actix_web::web;

use crate::handlers::time_entries;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/time-entries")
            .route(
                "/employees/{employee_id}/clock-in",
                web::post().to(time_entries::clock_in),
            )
            .route(
                "/employees/{employee_id}/clock-out",
                web::post().to(time_entries::clock_out),
            )
            .route(
                "/employees/{actor_id}/{employee_id}/clock-out",
                web::post().to(time_entries::clock_out_for_employee),
            ),
    );
}
