use actix_web::web;

pub mod employees;
pub mod reports;
pub mod time_entries;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(time_entries::configure)
            .configure(employees::configure)
            .configure(reports::configure),
    );
}
