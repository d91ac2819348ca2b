use std::time::Duration;

use moka::future::Cache;
use uuid::Uuid;

use crate::database::models::Employee;
use crate::database::repositories::EmployeeRepository;
use crate::error::AppError;

/// Read path for employee records: a read-through cache over the employee
/// store. Employees change only out-of-band, so staleness is bounded by the
/// cache TTL alone.
#[derive(Clone)]
pub struct EmployeeDirectory {
    employees: EmployeeRepository,
    cache: Cache<Uuid, Employee>,
}

impl EmployeeDirectory {
    pub fn new(employees: EmployeeRepository, max_capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();

        Self { employees, cache }
    }

    pub async fn get(&self, id: Uuid) -> Result<Employee, AppError> {
        if let Some(employee) = self.cache.get(&id).await {
            return Ok(employee);
        }

        let employee = self
            .employees
            .find_by_id(id)
            .await?
            .ok_or(AppError::EmployeeNotFound)?;
        self.cache.insert(id, employee.clone()).await;

        Ok(employee)
    }

    /// The whole directory, oldest first. An empty directory is reported as
    /// a lookup failure rather than an empty list.
    pub async fn list_all(&self) -> Result<Vec<Employee>, AppError> {
        let employees = self.employees.list_all().await?;
        if employees.is_empty() {
            return Err(AppError::EmployeeNotFound);
        }

        Ok(employees)
    }
}
