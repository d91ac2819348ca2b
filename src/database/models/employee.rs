use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    /// Flat pay per worked hour, always positive.
    pub hourly_rate: i64,
    /// Contracted hours per working day, used for expected-hours math.
    pub work_hours_per_day: i64,
    pub role: EmployeeRole,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeRole {
    Standard,
    Privileged,
}

impl sqlx::Type<sqlx::Sqlite> for EmployeeRole {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<sqlx::Sqlite>>::type_info()
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for EmployeeRole {
    fn encode_by_ref(
        &self,
        args: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        let s = match self {
            EmployeeRole::Standard => "standard",
            EmployeeRole::Privileged => "privileged",
        };
        <&str as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&s, args)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for EmployeeRole {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        match s.as_str() {
            "standard" => Ok(EmployeeRole::Standard),
            "privileged" => Ok(EmployeeRole::Privileged),
            _ => Err(format!("Invalid EmployeeRole: {}", s).into()),
        }
    }
}

impl Default for EmployeeRole {
    fn default() -> Self {
        EmployeeRole::Standard
    }
}

impl std::fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeRole::Standard => write!(f, "standard"),
            EmployeeRole::Privileged => write!(f, "privileged"),
        }
    }
}

impl std::str::FromStr for EmployeeRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(EmployeeRole::Standard),
            "privileged" => Ok(EmployeeRole::Privileged),
            _ => Err(format!("Invalid EmployeeRole: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEmployeeInput {
    pub full_name: String,
    pub email: String,
    pub hourly_rate: i64,
    pub work_hours_per_day: i64,
    pub role: EmployeeRole,
}

impl Employee {
    pub fn new(input: CreateEmployeeInput) -> Self {
        let now = chrono::Local::now().naive_local();
        Self {
            id: Uuid::new_v4(),
            full_name: input.full_name,
            email: input.email,
            hourly_rate: input.hourly_rate,
            work_hours_per_day: input.work_hours_per_day,
            role: input.role,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_privileged(&self) -> bool {
        self.role == EmployeeRole::Privileged
    }
}
