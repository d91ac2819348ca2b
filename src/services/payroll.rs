use crate::database::models::{Employee, PaymentBreakdown, Shift, YearMonth};
use crate::database::repositories::ShiftRepository;
use crate::error::AppError;

/// Aggregates an employee's closed shifts in a calendar month into hours,
/// overtime, and flat pay. Reads go straight to the store; the ledger's
/// shift cache is not involved here.
#[derive(Clone)]
pub struct PayrollCalculator {
    shifts: ShiftRepository,
    workdays_per_month: i64,
}

impl PayrollCalculator {
    pub fn new(shifts: ShiftRepository, workdays_per_month: i64) -> Self {
        Self {
            shifts,
            workdays_per_month,
        }
    }

    pub async fn compute_for_month(
        &self,
        employee: &Employee,
        month: YearMonth,
    ) -> Result<PaymentBreakdown, AppError> {
        let closed = self.shifts.find_closed_in_month(employee.id, month).await?;

        let total_hours = Self::total_whole_hours(&closed);
        let expected_hours = self.workdays_per_month * employee.work_hours_per_day;
        let overtime = total_hours - expected_hours;
        let pay = total_hours * employee.hourly_rate;

        log::debug!(
            "Payroll for employee {} in {}: {} shift(s), {} hour(s)",
            employee.id,
            month,
            closed.len(),
            total_hours
        );

        Ok(PaymentBreakdown {
            employee: employee.clone(),
            total_hours,
            expected_hours,
            overtime,
            pay,
        })
    }

    /// Independent per-employee computation, results in input order.
    pub async fn compute_for_month_batch(
        &self,
        employees: &[Employee],
        month: YearMonth,
    ) -> Result<Vec<PaymentBreakdown>, AppError> {
        let mut breakdowns = Vec::with_capacity(employees.len());
        for employee in employees {
            breakdowns.push(self.compute_for_month(employee, month).await?);
        }

        Ok(breakdowns)
    }

    /// Whole hours across closed shifts. Each shift's fractional remainder
    /// is truncated toward zero before summing, so two 7.5h shifts count as
    /// 14 hours, not 15. A corrupt row with check-out before check-in
    /// contributes its negative whole-hour count as-is.
    fn total_whole_hours(shifts: &[Shift]) -> i64 {
        shifts
            .iter()
            .filter_map(|shift| {
                shift
                    .check_out
                    .map(|check_out| (check_out - shift.check_in).num_hours())
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn closed_shift(day: NaiveDate, from: (u32, u32), to: (u32, u32)) -> Shift {
        let check_in = day.and_hms_opt(from.0, from.1, 0).unwrap();
        let check_out = day.and_hms_opt(to.0, to.1, 0).unwrap();
        Shift {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            check_in,
            check_out: Some(check_out),
            is_manual: false,
            created_at: check_in,
            updated_at: check_out,
        }
    }

    #[test]
    fn truncates_fractional_hours_per_shift() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let shifts = vec![
            closed_shift(day, (9, 0), (16, 30)),  // 7.5h -> 7
            closed_shift(day, (17, 0), (23, 45)), // 6.75h -> 6
        ];

        assert_eq!(PayrollCalculator::total_whole_hours(&shifts), 13);
    }

    #[test]
    fn skips_open_shifts() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let mut open = closed_shift(day, (9, 0), (17, 0));
        open.check_out = None;

        assert_eq!(PayrollCalculator::total_whole_hours(&[open]), 0);
    }

    #[test]
    fn negative_durations_are_summed_as_is() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        // Corrupt row: check-out 90 minutes before check-in.
        let corrupt = closed_shift(day, (12, 0), (10, 30));
        let honest = closed_shift(day, (13, 0), (21, 0)); // 8h

        assert_eq!(PayrollCalculator::total_whole_hours(&[corrupt.clone()]), -1);
        assert_eq!(PayrollCalculator::total_whole_hours(&[corrupt, honest]), 7);
    }
}
