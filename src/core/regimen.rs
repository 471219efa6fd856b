use anyhow::{Result, bail};

use crate::db::Database;
use crate::models::analysis::{AS_PRESCRIBED, ExtractedDrug};
use crate::models::config::Config;
use crate::models::drug::{DrugEntry, PatientProfile};
use crate::models::regimen::RegimenEntry;

// ---------------------------------------------------------------------------
// Stored medication list
// ---------------------------------------------------------------------------

/// Parameters for adding a drug to the stored list.
pub struct AddDrugParams<'a> {
    pub name: &'a str,
    pub dosage: Option<&'a str>,
    pub frequency: Option<&'a str>,
}

pub fn add_drug(db: &Database, params: AddDrugParams<'_>) -> Result<RegimenEntry> {
    if params.name.trim().is_empty() {
        bail!("drug name must not be empty");
    }
    let mut drug = DrugEntry::new(params.name.trim());
    drug.dosage = params.dosage.map(String::from);
    drug.frequency = params.frequency.map(String::from);
    store_entry(db, drug)
}

fn store_entry(db: &Database, drug: DrugEntry) -> Result<RegimenEntry> {
    let entry = RegimenEntry::new(drug);
    db.upsert_regimen_entry(&entry)?;
    tracing::debug!("Regimen entry stored");

    // an update keeps the original id and timestamp
    Ok(db.get_regimen_entry(&entry.name)?.unwrap_or(entry))
}

pub fn list_drugs(db: &Database) -> Result<Vec<RegimenEntry>> {
    db.list_regimen()
}

pub fn remove_drug(db: &Database, name: &str) -> Result<bool> {
    db.remove_regimen_entry(&name.to_lowercase())
}

pub fn clear_drugs(db: &Database) -> Result<usize> {
    db.clear_regimen()
}

/// Store extracted mentions, one entry per drug name.
///
/// A phrase like "ibuprofen 400mg every 6 hours" is reported once with its
/// interval and again, later, as a bare mention. A mention carrying an
/// interval is never replaced by one without; otherwise the later mention
/// wins.
pub fn store_extracted(db: &Database, drugs: &[ExtractedDrug]) -> Result<Vec<RegimenEntry>> {
    for drug in collapse_mentions(drugs) {
        store_entry(db, drug)?;
    }
    db.list_regimen()
}

fn collapse_mentions(drugs: &[ExtractedDrug]) -> Vec<DrugEntry> {
    let mut kept: Vec<&ExtractedDrug> = Vec::new();
    for drug in drugs {
        match kept.iter_mut().find(|k| k.name == drug.name) {
            Some(k) if k.frequency != AS_PRESCRIBED && drug.frequency == AS_PRESCRIBED => {}
            Some(k) => *k = drug,
            None => kept.push(drug),
        }
    }
    kept.into_iter().cloned().map(DrugEntry::from).collect()
}

// ---------------------------------------------------------------------------
// Profile resolution
// ---------------------------------------------------------------------------

/// Build a profile from the stored list and the configured patient.
///
/// `age` overrides the age derived from `profile.birth_year`.
pub fn stored_profile(db: &Database, config: &Config, age: Option<u32>) -> Result<PatientProfile> {
    let Some(age) = age.or_else(|| config.profile.current_age()) else {
        bail!("patient age unknown: pass --age or run `rxcheck config set birth_year <YYYY>`");
    };
    let drugs = db
        .list_regimen()?
        .iter()
        .map(RegimenEntry::to_drug_entry)
        .collect();

    let mut profile = PatientProfile::new(age, drugs);
    profile.medical_conditions = config.profile.conditions.clone();
    Ok(profile)
}
