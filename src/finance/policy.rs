use serde::{Deserialize, Serialize};

/// Profitability classification of a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProfitStatus {
    #[serde(rename = "RENTABLE")]
    Profitable,
    #[serde(rename = "A_RISQUE")]
    AtRisk,
    #[serde(rename = "NON_RENTABLE")]
    NotProfitable,
}

/// Margin-percentage cutoffs mapping to [`ProfitStatus`].
///
/// Two policies ship because the product historically classified single
/// projects and the portfolio overview with different cutoffs. Each caller
/// picks one explicitly instead of the cutoffs being hardcoded twice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ThresholdPolicy {
    /// Margin percentage at or above which a project is profitable.
    pub profitable_min_pct: f64,
    /// Margin percentage at or above which a project is merely at risk.
    pub at_risk_min_pct: f64,
}

impl ThresholdPolicy {
    /// Canonical cutoffs used for single-project summaries: >= 15% is
    /// profitable, >= 5% is at risk, below that not profitable.
    pub fn standard() -> Self {
        Self {
            profitable_min_pct: 15.0,
            at_risk_min_pct: 5.0,
        }
    }

    /// Legacy portfolio-overview cutoffs: >= 20% profitable, >= 0% at risk.
    pub fn portfolio() -> Self {
        Self {
            profitable_min_pct: 20.0,
            at_risk_min_pct: 0.0,
        }
    }

    /// Total over all margin percentages; the partition has no gaps or
    /// overlaps.
    pub fn classify(&self, margin_pct: f64) -> ProfitStatus {
        if margin_pct >= self.profitable_min_pct {
            ProfitStatus::Profitable
        } else if margin_pct >= self.at_risk_min_pct {
            ProfitStatus::AtRisk
        } else {
            ProfitStatus::NotProfitable
        }
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_partition_has_no_gaps() {
        let policy = ThresholdPolicy::standard();
        assert_eq!(policy.classify(94.0), ProfitStatus::Profitable);
        assert_eq!(policy.classify(15.0), ProfitStatus::Profitable);
        assert_eq!(policy.classify(14.999), ProfitStatus::AtRisk);
        assert_eq!(policy.classify(5.0), ProfitStatus::AtRisk);
        assert_eq!(policy.classify(4.999), ProfitStatus::NotProfitable);
        assert_eq!(policy.classify(0.0), ProfitStatus::NotProfitable);
        assert_eq!(policy.classify(-100.0), ProfitStatus::NotProfitable);
    }

    #[test]
    fn portfolio_cutoffs_differ_at_the_boundaries() {
        let policy = ThresholdPolicy::portfolio();
        assert_eq!(policy.classify(20.0), ProfitStatus::Profitable);
        assert_eq!(policy.classify(19.9), ProfitStatus::AtRisk);
        assert_eq!(policy.classify(0.0), ProfitStatus::AtRisk);
        assert_eq!(policy.classify(-0.1), ProfitStatus::NotProfitable);
    }

    #[test]
    fn status_serializes_to_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&ProfitStatus::AtRisk).unwrap(),
            "\"A_RISQUE\""
        );
        assert_eq!(
            serde_json::to_string(&ProfitStatus::Profitable).unwrap(),
            "\"RENTABLE\""
        );
    }
}
