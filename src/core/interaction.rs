use crate::models::analysis::InteractionFinding;
use crate::models::drug::PatientProfile;
use crate::models::knowledge::KnowledgeBase;

/// Every known interaction among `drug_names`.
///
/// Pairs are visited as (0,1), (0,2), .., (1,2), .. and findings come out in
/// that order. Repeated names are checked again, not collapsed.
pub fn find_interactions<S: AsRef<str>>(
    kb: &KnowledgeBase,
    drug_names: &[S],
) -> Vec<InteractionFinding> {
    let names: Vec<String> = drug_names
        .iter()
        .map(|n| n.as_ref().to_lowercase())
        .collect();

    let mut findings = Vec::new();
    for (i, first) in names.iter().enumerate() {
        for second in &names[i + 1..] {
            if let Some(rule) = kb.interaction(first, second) {
                findings.push(InteractionFinding {
                    severity: rule.severity,
                    description: rule.description.clone(),
                    drugs_involved: [first.clone(), second.clone()],
                });
            }
        }
    }
    findings
}

pub fn analyze_interactions(kb: &KnowledgeBase, profile: &PatientProfile) -> Vec<InteractionFinding> {
    find_interactions(kb, &profile.drug_names())
}
