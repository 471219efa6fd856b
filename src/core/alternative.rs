use crate::core::overdose;
use crate::models::analysis::{AlternativeSuggestion, CONSULT_PHYSICIAN, OVERDOSE_DETECTED_PREFIX};
use crate::models::drug::PatientProfile;
use crate::models::knowledge::{AgeBand, KnowledgeBase};

/// Registered substitutes for each drug, with the substitute's own dosage
/// for the patient's age band.
pub fn suggest_alternatives(
    kb: &KnowledgeBase,
    profile: &PatientProfile,
) -> Vec<AlternativeSuggestion> {
    let band = AgeBand::for_age(profile.age);
    let mut suggestions = Vec::new();

    for drug in &profile.drugs {
        let check = overdose::evaluate_entry(kb, drug);

        for alt in kb.alternatives(&drug.name) {
            let reason = if check.is_overdose {
                format!("{OVERDOSE_DETECTED_PREFIX}{}", alt.reason)
            } else {
                alt.reason.clone()
            };
            let dosage = kb
                .dosage(&alt.name)
                .map(|rule| rule.for_band(band).to_string())
                .unwrap_or_else(|| CONSULT_PHYSICIAN.to_string());

            suggestions.push(AlternativeSuggestion {
                name: alt.name.clone(),
                reason,
                dosage,
            });
        }
    }

    suggestions
}
