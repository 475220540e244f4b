//! Presentation helpers for the report and dashboard layers: status badges
//! and the narrative profitability line shown at the top of the PDF report.
//! Rendering itself (HTML, PDF) stays outside this crate.

use crate::currency::{format_cents, CurrencyCode, LocaleConfig};
use crate::finance::{div_round, FinancialResult, ProfitStatus};

/// Badge label for a profitability status.
pub fn status_label(status: ProfitStatus) -> &'static str {
    match status {
        ProfitStatus::Profitable => "RENTABLE",
        ProfitStatus::AtRisk => "À RISQUE",
        ProfitStatus::NotProfitable => "NON RENTABLE",
    }
}

/// Badge color (hex) for a profitability status.
pub fn status_color(status: ProfitStatus) -> &'static str {
    match status {
        ProfitStatus::Profitable => "#22c55e",
        ProfitStatus::AtRisk => "#f59e0b",
        ProfitStatus::NotProfitable => "#ef4444",
    }
}

/// One-line narrative summary of where the project stands: current gain or
/// loss plus the break-even buffer, phrased for the report hero block.
pub fn summary_line(result: &FinancialResult, locale: &LocaleConfig) -> String {
    let eur = CurrencyCode::default();
    let buffer_minutes = result.break_even_remaining_minutes;
    match result.status {
        ProfitStatus::Profitable => {
            let base = format!(
                "Tu gagnes actuellement {} sur ce projet.",
                format_cents(result.margin_cents, &eur, locale)
            );
            if buffer_minutes > 0 {
                format!(
                    "{} Il te reste environ {}h avant d’être en perte.",
                    base,
                    div_round(buffer_minutes, 60)
                )
            } else {
                base
            }
        }
        ProfitStatus::AtRisk => {
            "Attention, tu es proche de la perte. Tu arrives au seuil de rentabilité.".to_string()
        }
        ProfitStatus::NotProfitable => {
            let base = format!(
                "Tu perds actuellement {} sur ce projet.",
                format_cents(result.margin_cents.abs(), &eur, locale)
            );
            if buffer_minutes < 0 {
                format!(
                    "{} Tu as dépassé le seuil de rentabilité de {}h.",
                    base,
                    div_round(buffer_minutes.abs(), 60)
                )
            } else {
                base
            }
        }
    }
}
