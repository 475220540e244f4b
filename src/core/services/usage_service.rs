use uuid::Uuid;

use crate::domain::{Expense, TimeEntry};
use crate::finance::ActualUsage;

/// Folds persisted time entries and expenses into the aggregated usage the
/// calculator consumes.
pub struct UsageService;

impl UsageService {
    /// Sums minutes and groups expense amounts by category. Entries are
    /// assumed to belong to a single project already.
    pub fn aggregate(entries: &[TimeEntry], expenses: &[Expense]) -> ActualUsage {
        let labor_minutes = entries.iter().map(|entry| entry.minutes).sum();
        let mut usage = ActualUsage::new(labor_minutes);
        for expense in expenses {
            *usage
                .expenses_by_category
                .entry(expense.category)
                .or_insert(0) += expense.amount_cents;
        }
        usage
    }

    /// Like [`UsageService::aggregate`], but filters to one project first for
    /// callers holding mixed slices.
    pub fn aggregate_for_project(
        project_id: Uuid,
        entries: &[TimeEntry],
        expenses: &[Expense],
    ) -> ActualUsage {
        let entries: Vec<TimeEntry> = entries
            .iter()
            .filter(|entry| entry.project_id == project_id)
            .cloned()
            .collect();
        let expenses: Vec<Expense> = expenses
            .iter()
            .filter(|expense| expense.project_id == project_id)
            .cloned()
            .collect();
        Self::aggregate(&entries, &expenses)
    }
}
