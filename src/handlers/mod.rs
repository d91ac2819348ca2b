pub mod employees;
pub mod reports;
pub mod shared;
pub mod time_entries;
