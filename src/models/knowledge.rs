use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl FromStr for Severity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            other => Err(anyhow::anyhow!("unknown severity: {other}")),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "HIGH"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::Low => write!(f, "LOW"),
        }
    }
}

// ---------------------------------------------------------------------------
// AgeBand
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "0-12")]
    Pediatric,
    #[serde(rename = "13-65")]
    Adult,
    #[serde(rename = "65+")]
    Elderly,
}

impl AgeBand {
    /// Upper bounds are inclusive: 12 is pediatric, 65 is still adult.
    pub fn for_age(age: u32) -> Self {
        if age <= 12 {
            Self::Pediatric
        } else if age <= 65 {
            Self::Adult
        } else {
            Self::Elderly
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pediatric => "0-12",
            Self::Adult => "13-65",
            Self::Elderly => "65+",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRule {
    pub severity: Severity,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosageRule {
    #[serde(rename = "0-12")]
    pub pediatric: String,
    #[serde(rename = "13-65")]
    pub adult: String,
    #[serde(rename = "65+")]
    pub elderly: String,
    /// Milligrams per day.
    pub max_daily: f64,
}

impl DosageRule {
    pub fn new(
        pediatric: impl Into<String>,
        adult: impl Into<String>,
        elderly: impl Into<String>,
        max_daily: f64,
    ) -> Self {
        Self {
            pediatric: pediatric.into(),
            adult: adult.into(),
            elderly: elderly.into(),
            max_daily,
        }
    }

    pub fn for_band(&self, band: AgeBand) -> &str {
        match band {
            AgeBand::Pediatric => &self.pediatric,
            AgeBand::Adult => &self.adult,
            AgeBand::Elderly => &self.elderly,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRule {
    pub name: String,
    pub reason: String,
}

/// Canonical key for an unordered drug pair: both names lower-cased, sorted.
pub fn pair_key(a: &str, b: &str) -> (String, String) {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a <= b { (a, b) } else { (b, a) }
}

// ---------------------------------------------------------------------------
// KnowledgeBase
// ---------------------------------------------------------------------------

/// The rule tables every analysis reads from. Built once, then shared by
/// reference; lookups never mutate it.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    interactions: HashMap<(String, String), InteractionRule>,
    dosages: HashMap<String, DosageRule>,
    alternatives: HashMap<String, Vec<AlternativeRule>>,
}

/// On-disk TOML shape of a knowledge base.
#[derive(Debug, Default, Serialize, Deserialize)]
struct KnowledgeFile {
    #[serde(default)]
    interactions: Vec<InteractionEntry>,
    #[serde(default)]
    dosages: HashMap<String, DosageRule>,
    #[serde(default)]
    alternatives: HashMap<String, Vec<AlternativeRule>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct InteractionEntry {
    drugs: [String; 2],
    severity: Severity,
    description: String,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed illustrative tables shipped with the tool.
    pub fn builtin() -> Self {
        let mut kb = Self::new();

        kb.add_interaction("warfarin", "aspirin", Severity::High, "Increased bleeding risk");
        kb.add_interaction("paracetamol", "alcohol", Severity::High, "Liver toxicity risk");
        kb.add_interaction(
            "ibuprofen",
            "aspirin",
            Severity::Medium,
            "Increased GI bleeding risk",
        );
        kb.add_interaction("metformin", "alcohol", Severity::Medium, "Risk of lactic acidosis");

        kb.add_dosage(
            "paracetamol",
            DosageRule::new(
                "10-15mg/kg every 4-6 hours",
                "500-1000mg every 4-6 hours",
                "500mg every 6-8 hours",
                4000.0,
            ),
        );
        kb.add_dosage(
            "ibuprofen",
            DosageRule::new(
                "5-10mg/kg every 6-8 hours",
                "200-400mg every 6-8 hours",
                "200mg every 8 hours",
                1200.0,
            ),
        );
        kb.add_dosage(
            "aspirin",
            DosageRule::new("Not recommended", "75-325mg daily", "75mg daily", 325.0),
        );

        kb.add_alternative("paracetamol", "ibuprofen", "Anti-inflammatory effect");
        kb.add_alternative("ibuprofen", "paracetamol", "Lower GI risk");
        kb.add_alternative("aspirin", "paracetamol", "Safer for pain relief");

        kb
    }

    /// Parse a knowledge base from TOML, canonicalizing every name.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: KnowledgeFile = toml::from_str(contents)?;
        let mut kb = Self::new();

        for entry in file.interactions {
            let [a, b] = entry.drugs;
            if a.trim().is_empty() || b.trim().is_empty() {
                anyhow::bail!("interaction entry has an empty drug name");
            }
            if kb.interaction(&a, &b).is_some() {
                anyhow::bail!("duplicate interaction for pair {a} / {b}");
            }
            kb.add_interaction(&a, &b, entry.severity, entry.description);
        }

        for (name, rule) in file.dosages {
            if !rule.max_daily.is_finite() || rule.max_daily < 0.0 {
                anyhow::bail!("max_daily for {name} must be a non-negative number");
            }
            if kb.dosage(&name).is_some() {
                anyhow::bail!("duplicate dosage rule for {}", name.to_lowercase());
            }
            kb.add_dosage(&name, rule);
        }

        let mut sources = HashSet::new();
        for (source, alts) in file.alternatives {
            if !sources.insert(source.to_lowercase()) {
                anyhow::bail!("duplicate alternatives for {}", source.to_lowercase());
            }
            for alt in alts {
                kb.add_alternative(&source, alt.name, alt.reason);
            }
        }

        Ok(kb)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let kb = Self::from_toml_str(&contents)?;
        tracing::info!(
            interactions = kb.interactions.len(),
            dosages = kb.dosages.len(),
            alternatives = kb.alternatives.len(),
            "Knowledge base loaded"
        );
        Ok(kb)
    }

    pub fn add_interaction(
        &mut self,
        a: &str,
        b: &str,
        severity: Severity,
        description: impl Into<String>,
    ) {
        self.interactions.insert(
            pair_key(a, b),
            InteractionRule {
                severity,
                description: description.into(),
            },
        );
    }

    pub fn add_dosage(&mut self, name: &str, rule: DosageRule) {
        self.dosages.insert(name.to_lowercase(), rule);
    }

    /// Alternatives keep registration order.
    pub fn add_alternative(
        &mut self,
        source: &str,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) {
        self.alternatives
            .entry(source.to_lowercase())
            .or_default()
            .push(AlternativeRule {
                name: name.into(),
                reason: reason.into(),
            });
    }

    /// Pair order and casing do not matter.
    pub fn interaction(&self, a: &str, b: &str) -> Option<&InteractionRule> {
        self.interactions.get(&pair_key(a, b))
    }

    pub fn dosage(&self, name: &str) -> Option<&DosageRule> {
        self.dosages.get(&name.to_lowercase())
    }

    pub fn alternatives(&self, name: &str) -> &[AlternativeRule] {
        self.alternatives
            .get(&name.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
