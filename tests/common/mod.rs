#![allow(dead_code)]

use actix_web::web;
use anyhow::Result;
use chrono::NaiveDateTime;
use fake::Fake;
use fake::faker::name::en::Name;
use sqlx::SqlitePool;
use std::env;
use tempfile::TempDir;
use uuid::Uuid;

use timeclock::AppState;
use timeclock::config::Config;
use timeclock::database::init_database;
use timeclock::database::models::{CreateEmployeeInput, Employee, EmployeeRole, Shift};
use timeclock::database::repositories::{EmployeeRepository, ShiftRepository};
use timeclock::handlers::shared::ApiResponse;

// Test database wrapper
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());
        let pool = init_database(&database_url).await?;

        Ok(TestDb {
            pool,
            _temp_dir: temp_dir,
        })
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
        client_base_url: "http://localhost:3000".to_string(),
        workdays_per_month: 20,
        cache_max_capacity: 1000,
        cache_ttl_seconds: 300,
    }
}

// Everything a test needs: a throwaway database plus the wired services
// shared with the HTTP layer.
pub struct TestContext {
    pub db: TestDb,
    pub config: Config,
    pub state: web::Data<AppState>,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        setup_test_env();

        let db = TestDb::new().await?;
        let config = test_config();
        let state = web::Data::new(AppState::build(db.pool.clone(), &config));

        Ok(TestContext { db, config, state })
    }

    pub fn employees(&self) -> EmployeeRepository {
        EmployeeRepository::new(self.db.pool.clone())
    }

    pub fn shifts(&self) -> ShiftRepository {
        ShiftRepository::new(self.db.pool.clone())
    }
}

// Mock data generators
pub struct MockData;

impl MockData {
    pub fn employee(role: EmployeeRole) -> CreateEmployeeInput {
        let full_name: String = Name().fake();
        CreateEmployeeInput {
            full_name,
            email: format!("{}@example.com", Uuid::new_v4()),
            hourly_rate: 100,
            work_hours_per_day: 8,
            role,
        }
    }

    pub fn shift(
        employee_id: Uuid,
        check_in: NaiveDateTime,
        check_out: Option<NaiveDateTime>,
    ) -> Shift {
        Shift {
            id: Uuid::new_v4(),
            employee_id,
            check_in,
            check_out,
            is_manual: false,
            created_at: check_in,
            updated_at: check_out.unwrap_or(check_in),
        }
    }
}

// Helper functions
pub async fn create_employee(ctx: &TestContext, role: EmployeeRole) -> Employee {
    ctx.employees()
        .create(MockData::employee(role))
        .await
        .expect("Failed to create test employee")
}

pub async fn insert_shift(ctx: &TestContext, shift: &Shift) -> Shift {
    ctx.shifts()
        .save(shift)
        .await
        .expect("Failed to insert test shift")
}

// Test assertion helpers
pub struct TestAssertions;

impl TestAssertions {
    pub fn assert_success_response<T>(body: &[u8]) -> T
    where
        T: serde::de::DeserializeOwned,
    {
        let response: ApiResponse<T> =
            serde_json::from_slice(body).expect("Failed to parse JSON response");

        assert!(
            response.success,
            "Expected successful response but got error: {:?}",
            response.message
        );
        response.data.expect("Expected data in successful response")
    }

    pub async fn assert_record_count(pool: &SqlitePool, table: &str, expected_count: i64) {
        let query = format!("SELECT COUNT(*) as count FROM {}", table);
        let result = sqlx::query_scalar::<_, i64>(&query)
            .fetch_one(pool)
            .await
            .expect("Failed to count records");

        assert_eq!(
            result, expected_count,
            "Expected {} records in {} table, but found {}",
            expected_count, table, result
        );
    }
}

pub fn setup_test_env() {
    unsafe {
        env::set_var("RUST_LOG", "debug");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}
