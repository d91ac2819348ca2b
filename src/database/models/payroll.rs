use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::Employee;

/// Calendar-month key (`YYYY-MM`) scoping payroll aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid month key: {}", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid month key: {}", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month key: {}", s))?;
        Self::new(year, month).ok_or_else(|| format!("Invalid month key: {}", s))
    }
}

/// Derived payroll summary for one employee over one calendar month.
/// Never persisted; recomputed on every report request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBreakdown {
    pub employee: Employee,
    pub total_hours: i64,
    pub expected_hours: i64,
    /// Signed difference against expected hours; negative when underworked.
    pub overtime: i64,
    pub pay: i64,
}
