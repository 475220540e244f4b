use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A client project whose profitability is tracked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub revenue_cents: i64,
    pub lifecycle: Lifecycle,
    /// Forecast snapshot fixed at project creation; absent on legacy rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<PlannedBudget>,
    pub created_on: NaiveDate,
}

impl Project {
    pub fn new(name: impl Into<String>, revenue_cents: i64, created_on: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            client_name: None,
            address: None,
            revenue_cents,
            lifecycle: Lifecycle::Active,
            budget: None,
            created_on,
        }
    }

    pub fn with_client(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    pub fn with_budget(mut self, budget: PlannedBudget) -> Self {
        self.budget = Some(budget);
        self
    }
}

impl Identifiable for Project {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Project {
    fn display_label(&self) -> String {
        match &self.client_name {
            Some(client) => format!("{} — {}", self.name, client),
            None => self.name.clone(),
        }
    }
}

/// Lifecycle states a project moves through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Lifecycle {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "DONE")]
    Done,
    #[serde(rename = "ARCHIVED")]
    Archived,
}

/// Forecast labor and spend captured when the project was created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PlannedBudget {
    pub labor_minutes: i64,
    pub materials_cents: i64,
    pub subcontract_cents: i64,
    pub other_cents: i64,
}

impl PlannedBudget {
    /// Total planned non-labor spend.
    pub fn spend_cents(&self) -> i64 {
        self.materials_cents + self.subcontract_cents + self.other_cents
    }
}
