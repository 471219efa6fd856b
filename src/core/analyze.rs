use chrono::Utc;

use crate::core::{alternative, interaction, overdose, recommend};
use crate::models::analysis::ComprehensiveReport;
use crate::models::drug::PatientProfile;
use crate::models::knowledge::KnowledgeBase;

/// Run every check against one profile and bundle the results.
pub fn comprehensive_analysis(kb: &KnowledgeBase, profile: &PatientProfile) -> ComprehensiveReport {
    let interactions = interaction::analyze_interactions(kb, profile);
    let dosage_recommendations = recommend::recommend_dosages(kb, profile);
    let alternative_medications = alternative::suggest_alternatives(kb, profile);
    let overdose_warnings = overdose::overdose_summary(kb, &profile.drugs);

    tracing::info!(
        drugs = profile.drugs.len(),
        overdoses = overdose_warnings.len(),
        interactions = interactions.len(),
        alternatives = alternative_medications.len(),
        "Comprehensive analysis complete"
    );

    ComprehensiveReport {
        patient_age: profile.age,
        analyzed_drugs: profile.drugs.len(),
        overdose_warnings,
        interactions,
        dosage_recommendations,
        alternative_medications,
        analysis_timestamp: Utc::now(),
    }
}
