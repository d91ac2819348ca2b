pub mod employee;
pub mod payroll;
pub mod shift;

pub use employee::{CreateEmployeeInput, Employee, EmployeeRole};
pub use payroll::{PaymentBreakdown, YearMonth};
pub use shift::Shift;
