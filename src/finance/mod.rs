//! Project profitability arithmetic.
//!
//! Everything here is pure integer math over cents, minutes, and basis
//! points. The calculator validates nothing and never fails; callers are
//! expected to have run the [`crate::validate`] layer first. Divisions are
//! rounded half away from zero, which matches the reference behavior on the
//! non-negative input domain and keeps cent totals reproducible bit for bit.

pub mod policy;
pub mod variance;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{ExpenseCategory, PlannedBudget};

pub use policy::{ProfitStatus, ThresholdPolicy};
pub use variance::{variance_report, VarianceReport};

/// Aggregated real usage for one project: summed labor minutes and summed
/// expense amounts per category. Aggregation itself lives in
/// [`crate::core::services::UsageService`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ActualUsage {
    pub labor_minutes: i64,
    #[serde(default)]
    pub expenses_by_category: BTreeMap<ExpenseCategory, i64>,
}

impl ActualUsage {
    pub fn new(labor_minutes: i64) -> Self {
        Self {
            labor_minutes,
            expenses_by_category: BTreeMap::new(),
        }
    }

    pub fn with_expense(mut self, category: ExpenseCategory, amount_cents: i64) -> Self {
        *self.expenses_by_category.entry(category).or_insert(0) += amount_cents;
        self
    }

    fn category_cents(&self, category: ExpenseCategory) -> i64 {
        self.expenses_by_category.get(&category).copied().unwrap_or(0)
    }
}

/// Inputs to the profitability calculation. Revenue and hourly cost are in
/// cents, the overhead rate in basis points (10000 bps = 100%).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialInputs {
    pub revenue_cents: i64,
    pub hourly_cost_cents: i64,
    pub overhead_rate_bps: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned: Option<PlannedBudget>,
    pub actual: ActualUsage,
}

/// Actual cost breakdown derived from usage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CostBreakdown {
    pub labor_minutes: i64,
    pub labor_cost_cents: i64,
    pub materials_cents: i64,
    pub subcontract_cents: i64,
    pub other_cents: i64,
    pub overhead_cents: i64,
    pub total_costs_cents: i64,
}

/// Profitability summary for one project. Recomputed fresh on every render;
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialResult {
    pub revenue_cents: i64,
    pub actual: CostBreakdown,
    pub margin_cents: i64,
    pub margin_pct: f64,
    pub status: ProfitStatus,
    /// Signed buffer at the current burn rate: positive minutes remain before
    /// the project crosses into loss, negative minutes were burned past
    /// break-even already.
    pub break_even_remaining_minutes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned: Option<PlannedBudget>,
}

/// Derives the profitability summary using the standard threshold policy.
pub fn compute_financials(inputs: FinancialInputs) -> FinancialResult {
    compute_financials_with(inputs, &ThresholdPolicy::standard())
}

/// Derives the profitability summary, classifying status under `policy`.
pub fn compute_financials_with(
    inputs: FinancialInputs,
    policy: &ThresholdPolicy,
) -> FinancialResult {
    let usage = &inputs.actual;

    let labor_cost_cents = div_round(usage.labor_minutes * inputs.hourly_cost_cents, 60);

    let materials_cents = usage.category_cents(ExpenseCategory::Material);
    let subcontract_cents = usage.category_cents(ExpenseCategory::Subcontract);
    // Travel and rental fold into "other" for totals; raw per-category
    // breakdowns elsewhere keep them distinct.
    let other_cents = usage.category_cents(ExpenseCategory::Other)
        + usage.category_cents(ExpenseCategory::Travel)
        + usage.category_cents(ExpenseCategory::Rental);

    let direct_costs_cents = labor_cost_cents + materials_cents + subcontract_cents + other_cents;
    let overhead_cents = div_round(direct_costs_cents * inputs.overhead_rate_bps, 10_000);
    let total_costs_cents = direct_costs_cents + overhead_cents;

    let margin_cents = inputs.revenue_cents - total_costs_cents;
    // Zero when revenue is zero. Product policy, not a numeric default.
    let margin_pct = if inputs.revenue_cents > 0 {
        (margin_cents as f64 / inputs.revenue_cents as f64) * 100.0
    } else {
        0.0
    };

    let break_even_remaining_minutes = if inputs.hourly_cost_cents > 0 {
        div_floor(margin_cents * 60, inputs.hourly_cost_cents)
    } else {
        0
    };

    FinancialResult {
        revenue_cents: inputs.revenue_cents,
        actual: CostBreakdown {
            labor_minutes: usage.labor_minutes,
            labor_cost_cents,
            materials_cents,
            subcontract_cents,
            other_cents,
            overhead_cents,
            total_costs_cents,
        },
        margin_cents,
        margin_pct,
        status: policy.classify(margin_pct),
        break_even_remaining_minutes,
        planned: inputs.planned,
    }
}

/// Integer division rounding half away from zero. `den` must be positive.
pub(crate) fn div_round(num: i64, den: i64) -> i64 {
    debug_assert!(den > 0);
    if num >= 0 {
        (num + den / 2) / den
    } else {
        -((-num + den / 2) / den)
    }
}

/// Minutes converted to tenths of an hour, rounded half away from zero.
pub(crate) fn round_tenth_hours(minutes: i64) -> i64 {
    div_round(minutes * 10, 60)
}

/// Integer division rounding toward negative infinity. `den` must be positive.
pub(crate) fn div_floor(num: i64, den: i64) -> i64 {
    debug_assert!(den > 0);
    let quotient = num / den;
    if num % den != 0 && num < 0 {
        quotient - 1
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_round_rounds_half_away_from_zero() {
        assert_eq!(div_round(90, 60), 2); // 1.5 -> 2
        assert_eq!(div_round(89, 60), 1);
        assert_eq!(div_round(-90, 60), -2);
        assert_eq!(div_round(1, 10_000), 0);
        assert_eq!(div_round(5_000, 10_000), 1);
    }

    #[test]
    fn div_floor_truncates_toward_negative_infinity() {
        assert_eq!(div_floor(59, 60), 0);
        assert_eq!(div_floor(-1, 60), -1);
        assert_eq!(div_floor(-60, 60), -1);
        assert_eq!(div_floor(120, 60), 2);
    }

    #[test]
    fn labor_cost_rounds_at_the_minute_boundary() {
        // 90 minutes at 33.33 €/h: 90 * 3333 / 60 = 4999.5 rounds to 5000.
        let result = compute_financials(FinancialInputs {
            revenue_cents: 0,
            hourly_cost_cents: 3_333,
            overhead_rate_bps: 0,
            planned: None,
            actual: ActualUsage::new(90),
        });
        assert_eq!(result.actual.labor_cost_cents, 5_000);
    }

    #[test]
    fn travel_and_rental_fold_into_other() {
        let actual = ActualUsage::new(0)
            .with_expense(ExpenseCategory::Material, 1_000)
            .with_expense(ExpenseCategory::Subcontract, 2_000)
            .with_expense(ExpenseCategory::Travel, 300)
            .with_expense(ExpenseCategory::Rental, 400)
            .with_expense(ExpenseCategory::Other, 500);
        let result = compute_financials(FinancialInputs {
            revenue_cents: 10_000,
            hourly_cost_cents: 0,
            overhead_rate_bps: 0,
            planned: None,
            actual,
        });
        assert_eq!(result.actual.materials_cents, 1_000);
        assert_eq!(result.actual.subcontract_cents, 2_000);
        assert_eq!(result.actual.other_cents, 1_200);
        assert_eq!(result.actual.total_costs_cents, 4_200);
    }

    #[test]
    fn margin_pct_is_zero_for_zero_revenue() {
        let result = compute_financials(FinancialInputs {
            revenue_cents: 0,
            hourly_cost_cents: 5_000,
            overhead_rate_bps: 0,
            planned: None,
            actual: ActualUsage::new(60),
        });
        assert_eq!(result.margin_cents, -5_000);
        assert_eq!(result.margin_pct, 0.0);
        assert_eq!(result.status, ProfitStatus::NotProfitable);
    }

    #[test]
    fn break_even_is_guarded_when_hourly_cost_is_zero() {
        let result = compute_financials(FinancialInputs {
            revenue_cents: 10_000,
            hourly_cost_cents: 0,
            overhead_rate_bps: 0,
            planned: None,
            actual: ActualUsage::new(100).with_expense(ExpenseCategory::Other, 20_000),
        });
        assert_eq!(result.actual.total_costs_cents, 20_000);
        assert_eq!(result.margin_cents, -10_000);
        assert_eq!(result.margin_pct, -100.0);
        assert_eq!(result.status, ProfitStatus::NotProfitable);
        assert_eq!(result.break_even_remaining_minutes, 0);
    }

    #[test]
    fn planned_budget_is_echoed_unchanged() {
        let planned = PlannedBudget {
            labor_minutes: 600,
            materials_cents: 10_000,
            subcontract_cents: 0,
            other_cents: 2_500,
        };
        let result = compute_financials(FinancialInputs {
            revenue_cents: 100_000,
            hourly_cost_cents: 4_000,
            overhead_rate_bps: 0,
            planned: Some(planned),
            actual: ActualUsage::new(0),
        });
        assert_eq!(result.planned, Some(planned));
    }

    #[test]
    fn identical_inputs_produce_identical_results() {
        let inputs = FinancialInputs {
            revenue_cents: 250_000,
            hourly_cost_cents: 5_000,
            overhead_rate_bps: 1_500,
            planned: None,
            actual: ActualUsage::new(437).with_expense(ExpenseCategory::Material, 12_345),
        };
        let first = compute_financials(inputs.clone());
        let second = compute_financials(inputs);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
