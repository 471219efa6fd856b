use regex::Regex;
use std::sync::LazyLock;

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap());
static EVERY_HOURS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"every\s*([0-9]+)\s*hours?").unwrap());

/// First number in a dosage string, or `0.0` when there is none.
///
/// Units are ignored: `"2g"` reads as `2.0`, and only the first number of
/// `"500mg + 200mg"` counts.
pub fn extract_amount(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return 0.0;
    };
    AMOUNT_RE
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// ParsedFrequency
// ---------------------------------------------------------------------------

/// What the frequency parser understood from a free-text schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedFrequency {
    /// "every N hours", N > 0. Counts too large for `u64` saturate.
    EveryHours(u64),
    /// Anything else, including named schedules like "twice daily" or "bid".
    Unrecognized,
}

impl ParsedFrequency {
    pub fn parse(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return Self::Unrecognized;
        };
        let lower = text.to_lowercase();
        let Some(digits) = EVERY_HOURS_RE.captures(&lower).and_then(|caps| caps.get(1)) else {
            return Self::Unrecognized;
        };
        // the capture is all digits, so a failed parse is an overflow
        match digits.as_str().parse::<u64>() {
            Ok(0) => Self::Unrecognized,
            Ok(hours) => Self::EveryHours(hours),
            Err(_) => Self::EveryHours(u64::MAX),
        }
    }

    /// Floor of 24 / hours for intervals; one dose a day otherwise.
    /// Intervals longer than a day give zero.
    pub fn doses_per_day(&self) -> u32 {
        match self {
            Self::EveryHours(hours) if *hours > 24 => 0,
            Self::EveryHours(hours) => 24 / *hours as u32,
            Self::Unrecognized => 1,
        }
    }
}

/// Doses per day implied by a frequency string. See [`ParsedFrequency`].
pub fn doses_per_day(text: Option<&str>) -> u32 {
    ParsedFrequency::parse(text).doses_per_day()
}
