//! Input validation for the calling layer. The calculator itself accepts
//! whatever it is given (see [`crate::finance`]); drafts coming from forms or
//! the API are checked and normalized here first. Amounts arrive in euros and
//! hours, as typed by users, and are stored as cents and minutes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Expense, ExpenseCategory, PlannedBudget, Project, TimeEntry};
use crate::errors::ProfitError;

/// Hard limit per time entry: one day.
pub const MAX_ENTRY_MINUTES: i64 = 24 * 60;
/// Hard limit per expense, in euros. Prevents absurd values that would break
/// charts.
pub const MAX_EXPENSE_EUR: f64 = 1_000_000.0;

/// Unvalidated project creation payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProjectDraft {
    pub name: String,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub revenue_eur: f64,
    #[serde(default)]
    pub planned_labor_hours: Option<f64>,
    #[serde(default)]
    pub planned_materials_eur: Option<f64>,
    #[serde(default)]
    pub planned_subcontract_eur: Option<f64>,
    #[serde(default)]
    pub planned_other_eur: Option<f64>,
}

impl ProjectDraft {
    pub fn validate(self, created_on: NaiveDate) -> Result<Project, ProfitError> {
        let name = self.name.trim();
        if name.chars().count() < 2 {
            return Err(ProfitError::InvalidInput(
                "project name must have at least 2 characters".into(),
            ));
        }
        let revenue_cents = non_negative_eur_to_cents("revenue", self.revenue_eur)?;

        // The planned budget is always materialized at creation, with absent
        // fields defaulting to zero.
        let budget = PlannedBudget {
            labor_minutes: non_negative_hours_to_minutes(
                "planned labor hours",
                self.planned_labor_hours.unwrap_or(0.0),
            )?,
            materials_cents: non_negative_eur_to_cents(
                "planned materials",
                self.planned_materials_eur.unwrap_or(0.0),
            )?,
            subcontract_cents: non_negative_eur_to_cents(
                "planned subcontract",
                self.planned_subcontract_eur.unwrap_or(0.0),
            )?,
            other_cents: non_negative_eur_to_cents(
                "planned other",
                self.planned_other_eur.unwrap_or(0.0),
            )?,
        };

        let mut project = Project::new(name, revenue_cents, created_on).with_budget(budget);
        project.client_name = normalize_opt(self.client_name);
        project.address = normalize_opt(self.address);
        Ok(project)
    }
}

/// Unvalidated time entry payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeEntryDraft {
    pub project_id: Uuid,
    pub date: NaiveDate,
    pub minutes: i64,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl TimeEntryDraft {
    pub fn validate(self) -> Result<TimeEntry, ProfitError> {
        if !(1..=MAX_ENTRY_MINUTES).contains(&self.minutes) {
            return Err(ProfitError::InvalidInput(format!(
                "minutes must be between 1 and {}, got {}",
                MAX_ENTRY_MINUTES, self.minutes
            )));
        }
        let mut entry = TimeEntry::new(self.project_id, self.date, self.minutes);
        entry.task = normalize_opt(self.task);
        entry.note = normalize_opt(self.note);
        Ok(entry)
    }
}

/// Unvalidated expense payload; the category arrives in its wire spelling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseDraft {
    pub project_id: Uuid,
    pub date: NaiveDate,
    pub category: String,
    pub amount_eur: f64,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl ExpenseDraft {
    pub fn validate(self) -> Result<Expense, ProfitError> {
        let category: ExpenseCategory = self.category.parse()?;
        if !self.amount_eur.is_finite() || self.amount_eur < 0.0 || self.amount_eur > MAX_EXPENSE_EUR
        {
            return Err(ProfitError::InvalidInput(format!(
                "expense amount must be between 0 and {} euros",
                MAX_EXPENSE_EUR
            )));
        }
        let amount_cents = eur_to_cents(self.amount_eur);
        let mut expense = Expense::new(self.project_id, self.date, category, amount_cents);
        expense.vendor = normalize_opt(self.vendor);
        expense.note = normalize_opt(self.note);
        Ok(expense)
    }
}

fn eur_to_cents(eur: f64) -> i64 {
    (eur * 100.0).round() as i64
}

fn non_negative_eur_to_cents(field: &str, eur: f64) -> Result<i64, ProfitError> {
    if !eur.is_finite() || eur < 0.0 {
        return Err(ProfitError::InvalidInput(format!(
            "{} must be a non-negative amount",
            field
        )));
    }
    Ok(eur_to_cents(eur))
}

fn non_negative_hours_to_minutes(field: &str, hours: f64) -> Result<i64, ProfitError> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(ProfitError::InvalidInput(format!(
            "{} must be a non-negative duration",
            field
        )));
    }
    Ok((hours * 60.0).round() as i64)
}

fn normalize_opt(value: Option<String>) -> Option<String> {
    match value {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => None,
    }
}
