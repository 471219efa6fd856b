pub mod analysis;
pub mod config;
pub mod drug;
pub mod knowledge;
pub mod regimen;

pub use analysis::{
    AlternativeSuggestion, ComprehensiveReport, DosageRecommendation, ExtractedDrug,
    InteractionFinding, OverdoseResult, OverdoseWarning,
};
pub use drug::{DrugEntry, PatientProfile};
pub use knowledge::{AgeBand, KnowledgeBase, Severity};
pub use regimen::RegimenEntry;
