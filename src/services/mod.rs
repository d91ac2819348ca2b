pub mod access;
pub mod directory;
pub mod payroll;
pub mod shift_ledger;

pub use access::AccessPolicy;
pub use directory::EmployeeDirectory;
pub use payroll::PayrollCalculator;
pub use shift_ledger::ShiftLedger;
