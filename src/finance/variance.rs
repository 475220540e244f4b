use serde::{Deserialize, Serialize};

use super::{div_round, FinancialResult};

/// Planned-versus-actual comparison for the report's "Prévu vs Réel" block.
///
/// Spend covers non-labor costs only (materials, subcontract, other), the
/// same scope the planned budget forecasts. Overhead and labor are excluded
/// on both sides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VarianceReport {
    pub planned_labor_minutes: i64,
    pub actual_labor_minutes: i64,
    /// Percent of planned hours consumed, rounded; zero when nothing was
    /// planned.
    pub hours_consumed_pct: i64,
    pub planned_spend_cents: i64,
    pub actual_spend_cents: i64,
    pub spend_consumed_pct: i64,
    /// Margin the plan implied: revenue minus planned spend.
    pub planned_margin_cents: i64,
    /// Actual margin minus the planned margin; negative means the project is
    /// doing worse than forecast.
    pub margin_deviation_cents: i64,
}

/// Builds the planned-versus-actual comparison, or `None` when the project
/// has no planned budget to compare against.
pub fn variance_report(result: &FinancialResult) -> Option<VarianceReport> {
    let planned = result.planned.as_ref()?;

    let planned_spend_cents = planned.spend_cents();
    let actual_spend_cents =
        result.actual.materials_cents + result.actual.subcontract_cents + result.actual.other_cents;

    let planned_margin_cents = result.revenue_cents - planned_spend_cents;

    Some(VarianceReport {
        planned_labor_minutes: planned.labor_minutes,
        actual_labor_minutes: result.actual.labor_minutes,
        hours_consumed_pct: consumed_pct(result.actual.labor_minutes, planned.labor_minutes),
        planned_spend_cents,
        actual_spend_cents,
        spend_consumed_pct: consumed_pct(actual_spend_cents, planned_spend_cents),
        planned_margin_cents,
        margin_deviation_cents: result.margin_cents - planned_margin_cents,
    })
}

fn consumed_pct(actual: i64, planned: i64) -> i64 {
    if planned > 0 {
        div_round(actual * 100, planned)
    } else {
        0
    }
}
