pub mod employee;
pub mod shift;

pub use employee::EmployeeRepository;
pub use shift::ShiftRepository;
