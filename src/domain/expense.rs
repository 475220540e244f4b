use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::errors::ProfitError;

/// Closed set of expense classifications.
///
/// `Travel` and `Rental` stay distinct in per-category breakdowns, but the
/// cost totals fold them into "other" (see [`crate::finance`]).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExpenseCategory {
    #[serde(rename = "MATERIAL")]
    Material,
    #[serde(rename = "RENTAL")]
    Rental,
    #[serde(rename = "TRAVEL")]
    Travel,
    #[serde(rename = "SUBCONTRACT")]
    Subcontract,
    #[serde(rename = "OTHER")]
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Material,
        ExpenseCategory::Rental,
        ExpenseCategory::Travel,
        ExpenseCategory::Subcontract,
        ExpenseCategory::Other,
    ];

    /// Wire spelling used by the persistence and API layers.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Material => "MATERIAL",
            ExpenseCategory::Rental => "RENTAL",
            ExpenseCategory::Travel => "TRAVEL",
            ExpenseCategory::Subcontract => "SUBCONTRACT",
            ExpenseCategory::Other => "OTHER",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = ProfitError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "MATERIAL" => Ok(ExpenseCategory::Material),
            "RENTAL" => Ok(ExpenseCategory::Rental),
            "TRAVEL" => Ok(ExpenseCategory::Travel),
            "SUBCONTRACT" => Ok(ExpenseCategory::Subcontract),
            "OTHER" => Ok(ExpenseCategory::Other),
            other => Err(ProfitError::InvalidInput(format!(
                "unknown expense category `{}`",
                other
            ))),
        }
    }
}

/// A single expense recorded against a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub project_id: Uuid,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub amount_cents: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Expense {
    pub fn new(
        project_id: Uuid,
        date: NaiveDate,
        category: ExpenseCategory,
        amount_cents: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            date,
            category,
            amount_cents,
            vendor: None,
            note: None,
        }
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} {} ({})", self.date, self.amount_cents, self.category)
    }
}
