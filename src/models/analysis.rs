use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::knowledge::{AgeBand, Severity};

/// Marker that opens every overdose warning.
pub const OVERDOSE_MARKER: &str = "OVERDOSE";
/// Escalation line added after an overdose warning.
pub const ESCALATION: &str = "REDUCE DOSAGE IMMEDIATELY";
/// Prefix put on alternative reasons when the source drug is overdosed.
pub const OVERDOSE_DETECTED_PREFIX: &str = "OVERDOSE DETECTED - ";
pub const ELDERLY_CAUTION: &str = "Elderly patient - monitor for side effects";
pub const PEDIATRIC_CAUTION: &str = "Pediatric dosing required";
/// Dosage shown for an alternative that has no dosage rule of its own.
pub const CONSULT_PHYSICIAN: &str = "Consult physician";
/// Frequency given to extracted mentions without an explicit interval.
pub const AS_PRESCRIBED: &str = "as prescribed";

// ---------------------------------------------------------------------------
// OverdoseResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdoseResult {
    pub is_overdose: bool,
    pub warning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_daily: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_safe: Option<f64>,
}

impl OverdoseResult {
    pub fn safe() -> Self {
        Self {
            is_overdose: false,
            warning: String::new(),
            estimated_daily: None,
            max_safe: None,
        }
    }

    pub fn overdose(estimated_daily: f64, max_safe: f64) -> Self {
        Self {
            is_overdose: true,
            warning: format!(
                "{OVERDOSE_MARKER}: {}mg/day exceeds {}mg/day",
                format_float(estimated_daily),
                format_number(max_safe)
            ),
            estimated_daily: Some(estimated_daily),
            max_safe: Some(max_safe),
        }
    }
}

/// Always shows a fractional part: `9000.0`, `7.5`. Magnitudes from `1e16`
/// up, and non-zero ones below `1e-4`, use exponent form: `1e+16`, `1e-05`.
pub fn format_float(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let magnitude = v.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
        return format_exponent(v);
    }
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

/// Drops the fractional part when there is none: `4000`, `2.5`.
pub fn format_number(v: f64) -> String {
    format!("{v}")
}

/// `1.5e17` becomes `1.5e+17`: signed exponent, at least two digits.
fn format_exponent(v: f64) -> String {
    let raw = format!("{v:e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

// ---------------------------------------------------------------------------
// Findings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionFinding {
    pub severity: Severity,
    pub description: String,
    /// Lower-cased names in the order they appeared in the input.
    pub drugs_involved: [String; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosageRecommendation {
    pub drug_name: String,
    pub recommended_dosage: String,
    pub age_group: AgeBand,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeSuggestion {
    pub name: String,
    pub reason: String,
    pub dosage: String,
}

impl AlternativeSuggestion {
    pub fn flags_overdose(&self) -> bool {
        self.reason.starts_with(OVERDOSE_DETECTED_PREFIX)
    }
}

/// A drug mention recovered from free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDrug {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdoseWarning {
    /// Name as the caller spelled it.
    pub drug: String,
    pub warning: String,
    pub estimated_daily: f64,
    pub max_safe: f64,
}

// ---------------------------------------------------------------------------
// ComprehensiveReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComprehensiveReport {
    pub patient_age: u32,
    pub analyzed_drugs: usize,
    pub overdose_warnings: Vec<OverdoseWarning>,
    pub interactions: Vec<InteractionFinding>,
    pub dosage_recommendations: Vec<DosageRecommendation>,
    pub alternative_medications: Vec<AlternativeSuggestion>,
    pub analysis_timestamp: DateTime<Utc>,
}
