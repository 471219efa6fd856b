use regex::Regex;
use std::sync::LazyLock;

use crate::models::analysis::{AS_PRESCRIBED, ExtractedDrug};
use crate::models::drug::DrugEntry;

static INTERVAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+)\s+(\d+(?:\.\d+)?)\s*(mg|g)\s+(?:every|q)\s+(\d+)\s+hours?").unwrap()
});
static NAMED_FREQUENCY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+)\s+(\d+(?:\.\d+)?)\s*(mg|g)\s+(?:daily|once daily|bid|tid)").unwrap()
});
static IMPERATIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"take\s+(\w+)\s+(\d+(?:\.\d+)?)\s*(mg|g)").unwrap());
static BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s+(\d+(?:\.\d+)?)\s*(mg|g)").unwrap());

/// The mention shapes recognised in prose, tightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionPattern {
    /// `ibuprofen 400mg every 6 hours`, `... q 6 hours`
    Interval,
    /// `metformin 500mg daily`, `... bid`, `... tid`
    NamedFrequency,
    /// `take paracetamol 500mg`
    Imperative,
    /// `aspirin 75mg`
    Bare,
}

impl MentionPattern {
    /// Application order.
    pub const ALL: [Self; 4] = [
        Self::Interval,
        Self::NamedFrequency,
        Self::Imperative,
        Self::Bare,
    ];

    fn regex(&self) -> &'static Regex {
        match self {
            Self::Interval => &*INTERVAL_RE,
            Self::NamedFrequency => &*NAMED_FREQUENCY_RE,
            Self::Imperative => &*IMPERATIVE_RE,
            Self::Bare => &*BARE_RE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mention {
    pub pattern: MentionPattern,
    pub drug: ExtractedDrug,
}

/// Run every pattern over the whole lower-cased text.
///
/// Patterns are not exclusive: one phrase usually matches several of them and
/// each match is reported, so the output repeats and overlaps.
pub fn extract_mentions(text: &str) -> Vec<Mention> {
    let lower = text.to_lowercase();
    let mut mentions = Vec::new();

    for pattern in MentionPattern::ALL {
        for caps in pattern.regex().captures_iter(&lower) {
            let frequency = match caps.get(4) {
                Some(hours) => format!("every {} hours", hours.as_str()),
                None => AS_PRESCRIBED.to_string(),
            };
            mentions.push(Mention {
                pattern,
                drug: ExtractedDrug {
                    name: caps[1].to_string(),
                    dosage: format!("{}{}", &caps[2], &caps[3]),
                    frequency,
                },
            });
        }
    }

    tracing::debug!(count = mentions.len(), "Extracted drug mentions");
    mentions
}

pub fn extract_drugs_from_text(text: &str) -> Vec<ExtractedDrug> {
    extract_mentions(text).into_iter().map(|m| m.drug).collect()
}

impl From<ExtractedDrug> for DrugEntry {
    fn from(e: ExtractedDrug) -> Self {
        DrugEntry::new(e.name)
            .with_dosage(e.dosage)
            .with_frequency(e.frequency)
    }
}
