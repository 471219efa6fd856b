use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::drug::DrugEntry;

/// A drug kept in the user's stored medication list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegimenEntry {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl RegimenEntry {
    pub fn new(drug: DrugEntry) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: drug.key(),
            dosage: drug.dosage,
            frequency: drug.frequency,
            added_at: Utc::now(),
        }
    }

    pub fn to_drug_entry(&self) -> DrugEntry {
        DrugEntry {
            name: self.name.clone(),
            dosage: self.dosage.clone(),
            frequency: self.frequency.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_lowercases_name() {
        let e = RegimenEntry::new(DrugEntry::new("IBUPROFEN").with_dosage("400mg"));
        assert_eq!(e.name, "ibuprofen");
        assert_eq!(e.dosage.as_deref(), Some("400mg"));
        assert!(!e.id.is_empty());
    }

    #[test]
    fn to_drug_entry_keeps_text_fields() {
        let e = RegimenEntry::new(
            DrugEntry::new("paracetamol")
                .with_dosage("500mg")
                .with_frequency("every 6 hours"),
        );
        let d = e.to_drug_entry();
        assert_eq!(d.name, "paracetamol");
        assert_eq!(d.frequency_text(), "every 6 hours");
    }
}
