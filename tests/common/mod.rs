#![allow(dead_code)]

use rxcheck::db::Database;
use rxcheck::models::drug::{DrugEntry, PatientProfile};
use rxcheck::models::knowledge::KnowledgeBase;
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

pub fn kb() -> KnowledgeBase {
    KnowledgeBase::builtin()
}

/// Drug entry with dosage and frequency text.
pub fn drug(name: &str, dosage: &str, frequency: &str) -> DrugEntry {
    DrugEntry::new(name)
        .with_dosage(dosage)
        .with_frequency(frequency)
}

pub fn profile(age: u32, drugs: Vec<DrugEntry>) -> PatientProfile {
    PatientProfile::new(age, drugs)
}
