use crate::core::dosage::{ParsedFrequency, extract_amount};
use crate::models::analysis::{OverdoseResult, OverdoseWarning};
use crate::models::drug::DrugEntry;
use crate::models::knowledge::KnowledgeBase;

/// Estimate the daily intake of one drug and compare it with its maximum.
///
/// Unknown drugs, a missing amount, or a zero maximum all come back safe:
/// without both numbers there is nothing to compare. Amounts are taken as
/// milligrams whatever unit the text carries.
pub fn evaluate(
    kb: &KnowledgeBase,
    drug_name: &str,
    dosage: Option<&str>,
    frequency: Option<&str>,
) -> OverdoseResult {
    let Some(rule) = kb.dosage(drug_name) else {
        return OverdoseResult::safe();
    };

    let amount = extract_amount(dosage);
    let max_daily = rule.max_daily;
    if amount == 0.0 || max_daily == 0.0 {
        return OverdoseResult::safe();
    }

    let daily_doses = ParsedFrequency::parse(frequency).doses_per_day();
    let estimated_daily = amount * f64::from(daily_doses);

    if estimated_daily > max_daily {
        OverdoseResult::overdose(estimated_daily, max_daily)
    } else {
        OverdoseResult::safe()
    }
}

pub fn evaluate_entry(kb: &KnowledgeBase, drug: &DrugEntry) -> OverdoseResult {
    evaluate(kb, &drug.name, drug.dosage.as_deref(), drug.frequency.as_deref())
}

/// One warning per overdosed entry, in input order.
pub fn overdose_summary(kb: &KnowledgeBase, drugs: &[DrugEntry]) -> Vec<OverdoseWarning> {
    drugs
        .iter()
        .filter_map(|drug| {
            let result = evaluate_entry(kb, drug);
            if !result.is_overdose {
                return None;
            }
            Some(OverdoseWarning {
                drug: drug.name.clone(),
                warning: result.warning,
                estimated_daily: result.estimated_daily.unwrap_or(0.0),
                max_safe: result.max_safe.unwrap_or(0.0),
            })
        })
        .collect()
}
