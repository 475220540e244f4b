use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Displayable, Lifecycle, Project};
use crate::finance::{
    compute_financials_with, ActualUsage, FinancialInputs, ProfitStatus, ThresholdPolicy,
};

/// Company-wide cost parameters the calculator needs for every project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CompanyParams {
    pub hourly_cost_cents: i64,
    pub overhead_rate_bps: i64,
}

/// One line of the portfolio overview table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioRow {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    pub revenue_cents: i64,
    pub labor_minutes: i64,
    pub total_costs_cents: i64,
    pub margin_cents: i64,
    pub margin_pct: f64,
    pub lifecycle: Lifecycle,
    pub status: ProfitStatus,
}

/// Headline numbers across the whole portfolio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PortfolioKpis {
    pub revenue_cents: i64,
    pub margin_cents: i64,
    /// Projects that are not clearly profitable under the portfolio policy.
    pub at_risk_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioOverview {
    pub rows: Vec<PortfolioRow>,
    pub kpis: PortfolioKpis,
}

/// Builds the portfolio overview the dashboard renders: one financial row per
/// project plus aggregate KPIs. Classification uses
/// [`ThresholdPolicy::portfolio`].
pub struct PortfolioService;

impl PortfolioService {
    pub fn project_row(params: CompanyParams, project: &Project, usage: ActualUsage) -> PortfolioRow {
        let result = compute_financials_with(
            FinancialInputs {
                revenue_cents: project.revenue_cents,
                hourly_cost_cents: params.hourly_cost_cents,
                overhead_rate_bps: params.overhead_rate_bps,
                planned: project.budget,
                actual: usage,
            },
            &ThresholdPolicy::portfolio(),
        );

        tracing::trace!(
            project = %project.display_label(),
            margin_cents = result.margin_cents,
            "portfolio row computed"
        );

        PortfolioRow {
            id: project.id,
            name: project.name.clone(),
            client_name: project.client_name.clone(),
            revenue_cents: result.revenue_cents,
            labor_minutes: result.actual.labor_minutes,
            total_costs_cents: result.actual.total_costs_cents,
            margin_cents: result.margin_cents,
            margin_pct: result.margin_pct,
            lifecycle: project.lifecycle,
            status: result.status,
        }
    }

    pub fn overview(
        params: CompanyParams,
        projects: &[(Project, ActualUsage)],
    ) -> PortfolioOverview {
        let rows: Vec<PortfolioRow> = projects
            .iter()
            .map(|(project, usage)| Self::project_row(params, project, usage.clone()))
            .collect();

        let mut kpis = PortfolioKpis::default();
        for row in &rows {
            kpis.revenue_cents += row.revenue_cents;
            kpis.margin_cents += row.margin_cents;
            if row.status != ProfitStatus::Profitable {
                kpis.at_risk_count += 1;
            }
        }

        tracing::debug!(
            projects = rows.len(),
            at_risk = kpis.at_risk_count,
            "portfolio overview computed"
        );

        PortfolioOverview { rows, kpis }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpenseCategory;
    use chrono::NaiveDate;

    fn params() -> CompanyParams {
        CompanyParams {
            hourly_cost_cents: 5_000,
            overhead_rate_bps: 0,
        }
    }

    fn project(name: &str, revenue_cents: i64) -> Project {
        Project::new(name, revenue_cents, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    }

    #[test]
    fn row_uses_portfolio_cutoffs() {
        // 10h labor = 50000 cents cost on 60000 revenue: margin 16.66%,
        // profitable under the standard policy but only at risk here.
        let row = PortfolioService::project_row(
            params(),
            &project("Terrasse", 60_000),
            ActualUsage::new(600),
        );
        assert_eq!(row.margin_cents, 10_000);
        assert_eq!(row.status, ProfitStatus::AtRisk);
    }

    #[test]
    fn kpis_sum_rows_and_count_non_profitable() {
        let healthy = project("Toiture", 200_000);
        let losing = project("Salle de bain", 10_000);
        let items = vec![
            (healthy, ActualUsage::new(600)), // costs 50000, margin 150000 -> profitable
            (
                losing,
                ActualUsage::new(0).with_expense(ExpenseCategory::Material, 30_000),
            ), // margin -20000 -> not profitable
        ];

        let overview = PortfolioService::overview(params(), &items);
        assert_eq!(overview.kpis.revenue_cents, 210_000);
        assert_eq!(overview.kpis.margin_cents, 130_000);
        assert_eq!(overview.kpis.at_risk_count, 1);
    }
}
