use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::models::analysis::{
    AlternativeSuggestion, ComprehensiveReport, DosageRecommendation, ESCALATION, ExtractedDrug,
    InteractionFinding, OVERDOSE_MARKER, format_float, format_number,
};
use crate::models::knowledge::Severity;
use crate::models::regimen::RegimenEntry;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Colour a warning line by the markers it carries.
pub fn highlight(line: &str) -> String {
    if line.contains(ESCALATION) {
        line.red().bold().to_string()
    } else if line.contains(OVERDOSE_MARKER) {
        line.red().to_string()
    } else {
        line.yellow().to_string()
    }
}

fn severity_label(severity: Severity) -> String {
    let s = severity.to_string();
    match severity {
        Severity::High => s.red().bold().to_string(),
        Severity::Medium => s.yellow().to_string(),
        Severity::Low => s,
    }
}

pub fn format_interactions(findings: &[InteractionFinding]) -> String {
    if findings.is_empty() {
        return "No drug interactions found.".to_string();
    }
    let mut table = new_table(vec!["Severity", "Drugs", "Description"]);
    for f in findings {
        table.add_row(vec![
            severity_label(f.severity),
            f.drugs_involved.join(" + "),
            f.description.clone(),
        ]);
    }
    table.to_string()
}

pub fn format_dosages(recs: &[DosageRecommendation]) -> String {
    if recs.is_empty() {
        return "No dosage guidance for these drugs.".to_string();
    }
    let mut table = new_table(vec!["Drug", "Age group", "Recommended", "Warnings"]);
    for r in recs {
        let warnings = r
            .warnings
            .iter()
            .map(|w| highlight(w))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            r.drug_name.clone(),
            r.age_group.to_string(),
            r.recommended_dosage.clone(),
            warnings,
        ]);
    }
    table.to_string()
}

pub fn format_alternatives(alts: &[AlternativeSuggestion]) -> String {
    if alts.is_empty() {
        return "No alternatives registered.".to_string();
    }
    let mut table = new_table(vec!["Alternative", "Reason", "Dosage"]);
    for a in alts {
        let reason = if a.flags_overdose() {
            highlight(&a.reason)
        } else {
            a.reason.clone()
        };
        table.add_row(vec![a.name.clone(), reason, a.dosage.clone()]);
    }
    table.to_string()
}

pub fn format_extracted(drugs: &[ExtractedDrug]) -> String {
    if drugs.is_empty() {
        return "No drug information could be extracted.".to_string();
    }
    let mut table = new_table(vec!["Name", "Dosage", "Frequency"]);
    for d in drugs {
        table.add_row(vec![d.name.as_str(), d.dosage.as_str(), d.frequency.as_str()]);
    }
    table.to_string()
}

pub fn format_regimen(entries: &[RegimenEntry]) -> String {
    if entries.is_empty() {
        return "No medications stored.".to_string();
    }
    let mut table = new_table(vec!["Name", "Dosage", "Frequency", "Added"]);
    for e in entries {
        table.add_row(vec![
            e.name.clone(),
            e.dosage.clone().unwrap_or_else(|| "-".into()),
            e.frequency.clone().unwrap_or_else(|| "-".into()),
            e.added_at.format("%Y-%m-%d").to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_report(report: &ComprehensiveReport) -> String {
    let mut out = format!(
        "=== Medication Analysis — age {}, {} drug(s) ===\n",
        report.patient_age, report.analyzed_drugs
    );
    out.push_str(&format!(
        "Generated {}\n\n",
        report.analysis_timestamp.format("%Y-%m-%d %H:%M UTC")
    ));

    if report.overdose_warnings.is_empty() {
        out.push_str("No overdose detected.\n");
    } else {
        for w in &report.overdose_warnings {
            out.push_str(&highlight(&format!(
                "{} {} DETECTED: {}mg/day (max {}mg/day)",
                w.drug.to_uppercase(),
                OVERDOSE_MARKER,
                format_float(w.estimated_daily),
                format_number(w.max_safe)
            )));
            out.push('\n');
        }
    }

    out.push_str("\nInteractions\n");
    out.push_str(&format_interactions(&report.interactions));
    out.push_str("\n\nDosage recommendations\n");
    out.push_str(&format_dosages(&report.dosage_recommendations));
    out.push_str("\n\nAlternatives\n");
    out.push_str(&format_alternatives(&report.alternative_medications));
    out
}
