use crate::core::overdose;
use crate::models::analysis::{
    DosageRecommendation, ELDERLY_CAUTION, ESCALATION, PEDIATRIC_CAUTION,
};
use crate::models::drug::PatientProfile;
use crate::models::knowledge::{AgeBand, KnowledgeBase};

/// Age-banded dosage for every tabulated drug in the profile.
///
/// Drugs without a dosage rule are skipped. Warnings are ordered: overdose,
/// escalation, elderly caution (65 and over), pediatric caution (12 and under).
pub fn recommend_dosages(kb: &KnowledgeBase, profile: &PatientProfile) -> Vec<DosageRecommendation> {
    let band = AgeBand::for_age(profile.age);

    profile
        .drugs
        .iter()
        .filter_map(|drug| {
            let rule = kb.dosage(&drug.name)?;
            let mut warnings = Vec::new();

            let check = overdose::evaluate_entry(kb, drug);
            if check.is_overdose {
                warnings.push(check.warning);
                warnings.push(ESCALATION.to_string());
            }
            if profile.age >= 65 {
                warnings.push(ELDERLY_CAUTION.to_string());
            }
            if profile.age <= 12 {
                warnings.push(PEDIATRIC_CAUTION.to_string());
            }

            Some(DosageRecommendation {
                drug_name: drug.key(),
                recommended_dosage: rule.for_band(band).to_string(),
                age_group: band,
                warnings,
            })
        })
        .collect()
}
