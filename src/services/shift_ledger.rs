use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use moka::future::Cache;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::database::models::{Employee, Shift};
use crate::database::repositories::ShiftRepository;
use crate::error::AppError;

/// One async mutex per employee id. Open/close hold it across their whole
/// read-decide-write sequence so two racing calls for the same employee
/// cannot both observe the same ledger state.
#[derive(Clone, Default)]
struct EmployeeLocks {
    inner: Arc<Mutex<HashMap<Uuid, Arc<Mutex<()>>>>>,
}

impl EmployeeLocks {
    async fn acquire(&self, employee_id: Uuid) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().await;
            map.entry(employee_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        lock.lock_owned().await
    }
}

/// Shift lifecycle state machine. All per-employee state (no shift today,
/// open, closed today) is derived from the stored shift list evaluated
/// against today's date in the host timezone; nothing is stored beyond the
/// shifts themselves.
#[derive(Clone)]
pub struct ShiftLedger {
    shifts: ShiftRepository,
    cache: Cache<Uuid, Vec<Shift>>,
    locks: EmployeeLocks,
}

impl ShiftLedger {
    pub fn new(shifts: ShiftRepository, cache_max_capacity: u64, cache_ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(cache_max_capacity)
            .time_to_live(cache_ttl)
            .build();

        Self {
            shifts,
            cache,
            locks: EmployeeLocks::default(),
        }
    }

    /// Cached most-recent-first shift list for one employee.
    pub async fn shifts_for_employee(&self, employee_id: Uuid) -> Result<Vec<Shift>, AppError> {
        if let Some(shifts) = self.cache.get(&employee_id).await {
            return Ok(shifts);
        }

        let shifts = self.shifts.find_by_employee(employee_id).await?;
        self.cache.insert(employee_id, shifts.clone()).await;

        Ok(shifts)
    }

    pub async fn has_open_shift_today(&self, employee_id: Uuid) -> Result<bool, AppError> {
        let shifts = self.shifts_for_employee(employee_id).await?;
        Ok(Self::any_open_today(&shifts))
    }

    /// Whether this shift was fully worked today: closed, with check-in and
    /// check-out both on today's date.
    pub fn is_closed_today(shift: &Shift) -> bool {
        let today = Local::now().date_naive();
        match shift.check_out {
            Some(check_out) => shift.check_in.date() == today && check_out.date() == today,
            None => false,
        }
    }

    fn any_open_today(shifts: &[Shift]) -> bool {
        let today = Local::now().date_naive();
        shifts
            .iter()
            .any(|shift| shift.is_open() && shift.check_in.date() == today)
    }

    /// Start a new shift now. Refused while the employee already has an open
    /// shift from today; an unclosed shift from an earlier day does not
    /// block a fresh one.
    pub async fn open(&self, employee: &Employee) -> Result<Shift, AppError> {
        let _guard = self.locks.acquire(employee.id).await;

        let shifts = self.shifts_for_employee(employee.id).await?;
        if Self::any_open_today(&shifts) {
            return Err(AppError::ActiveShiftExists);
        }

        let shift = Shift::open_now(employee.id, employee.is_privileged());
        let saved = self.shifts.save(&shift).await?;
        self.invalidate(employee.id).await;

        log::info!("Opened shift {} for employee {}", saved.id, employee.id);
        Ok(saved)
    }

    /// Close the employee's latest shift now: the newest still-open shift
    /// when one exists, otherwise the newest shift overall. The manual flag
    /// is set when a privileged actor performs the closure and is never
    /// cleared afterwards.
    pub async fn close(
        &self,
        employee: &Employee,
        closed_by_privileged: bool,
    ) -> Result<Shift, AppError> {
        let _guard = self.locks.acquire(employee.id).await;

        let shifts = self.shifts_for_employee(employee.id).await?;
        let target = shifts
            .iter()
            .find(|shift| shift.is_open())
            .or_else(|| shifts.first())
            .ok_or(AppError::NoShiftFound)?;

        if Self::is_closed_today(target) {
            return Err(AppError::ShiftAlreadyClosedToday);
        }

        let now = Local::now().naive_local();
        if now <= target.check_in {
            return Err(AppError::InvalidArgument(format!(
                "check-out {} would not be after check-in {}",
                now, target.check_in
            )));
        }

        let mut updated = target.clone();
        updated.check_out = Some(now);
        if closed_by_privileged {
            updated.is_manual = true;
        }
        updated.updated_at = now;

        let saved = self.shifts.save(&updated).await?;
        self.invalidate(employee.id).await;

        log::info!("Closed shift {} for employee {}", saved.id, employee.id);
        Ok(saved)
    }

    async fn invalidate(&self, employee_id: Uuid) {
        self.cache.invalidate(&employee_id).await;
        log::debug!("Invalidated shift cache for employee {}", employee_id);
    }
}
