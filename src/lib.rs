use std::time::Duration;

use sqlx::SqlitePool;

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use services::{AccessPolicy, EmployeeDirectory, PayrollCalculator, ShiftLedger};

use database::repositories::{EmployeeRepository, ShiftRepository};

pub struct AppState {
    pub directory: EmployeeDirectory,
    pub access_policy: AccessPolicy,
    pub ledger: ShiftLedger,
    pub payroll: PayrollCalculator,
}

impl AppState {
    /// Wire repositories, caches, and services on top of one pool. Used by
    /// the server binary and by the integration test harness.
    pub fn build(pool: SqlitePool, config: &Config) -> Self {
        let employee_repository = EmployeeRepository::new(pool.clone());
        let shift_repository = ShiftRepository::new(pool);
        let cache_ttl = Duration::from_secs(config.cache_ttl_seconds);

        Self {
            directory: EmployeeDirectory::new(
                employee_repository,
                config.cache_max_capacity,
                cache_ttl,
            ),
            access_policy: AccessPolicy::new(),
            ledger: ShiftLedger::new(
                shift_repository.clone(),
                config.cache_max_capacity,
                cache_ttl,
            ),
            payroll: PayrollCalculator::new(shift_repository, config.workdays_per_month),
        }
    }
}
