use anyhow::Result;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DrugEntry
// ---------------------------------------------------------------------------

/// One medication as the caller reported it. Names are matched
/// case-insensitively; dosage and frequency stay free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

impl DrugEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dosage: None,
            frequency: None,
        }
    }

    pub fn with_dosage(mut self, dosage: impl Into<String>) -> Self {
        self.dosage = Some(dosage.into());
        self
    }

    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    /// Lower-cased identifier used for every table lookup.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn dosage_text(&self) -> &str {
        self.dosage.as_deref().unwrap_or("")
    }

    pub fn frequency_text(&self) -> &str {
        self.frequency.as_deref().unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// PatientProfile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub age: u32,
    pub drugs: Vec<DrugEntry>,
    /// Carried along for callers; no rule reads it yet.
    #[serde(default)]
    pub medical_conditions: Vec<String>,
}

impl PatientProfile {
    pub fn new(age: u32, drugs: Vec<DrugEntry>) -> Self {
        Self {
            age,
            drugs,
            medical_conditions: Vec::new(),
        }
    }

    /// Parse and validate a profile from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Reject entries the reasoning layer cannot make sense of.
    pub fn validate(&self) -> Result<()> {
        for (i, drug) in self.drugs.iter().enumerate() {
            if drug.name.trim().is_empty() {
                anyhow::bail!("drug entry {} has an empty name", i);
            }
        }
        Ok(())
    }

    pub fn drug_names(&self) -> Vec<&str> {
        self.drugs.iter().map(|d| d.name.as_str()).collect()
    }
}
