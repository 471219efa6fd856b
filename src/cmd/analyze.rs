use anyhow::Result;
use serde_json::json;
use std::io::Read;
use std::path::Path;

use rxcheck::core::{alternative, analyze, interaction, recommend, regimen};
use rxcheck::db::Database;
use rxcheck::models::config::Config;
use rxcheck::models::drug::PatientProfile;
use rxcheck::models::knowledge::KnowledgeBase;
use rxcheck::output;

use crate::cli::ProfileArgs;

/// Knowledge base plus the profile to analyze, from a file or the stored list.
fn prepare(args: &ProfileArgs) -> Result<(KnowledgeBase, PatientProfile)> {
    let config = Config::load()?;
    let kb = config.knowledge_base()?;

    let profile = match &args.input {
        Some(path) => {
            let mut profile = PatientProfile::from_json(&read_input(path)?)?;
            if let Some(age) = args.age {
                profile.age = age;
            }
            profile
        }
        None => {
            let db = Database::open(&Config::db_path())?;
            regimen::stored_profile(&db, &config, args.age)?
        }
    };
    Ok((kb, profile))
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

pub fn run_interactions(args: &ProfileArgs, human: bool) -> Result<()> {
    let (kb, profile) = prepare(args)?;
    let findings = interaction::analyze_interactions(&kb, &profile);

    if human {
        println!("{}", output::human::format_interactions(&findings));
    } else {
        output::emit("interactions", json!({ "interactions": findings }))?;
    }
    Ok(())
}

pub fn run_dosage(args: &ProfileArgs, human: bool) -> Result<()> {
    let (kb, profile) = prepare(args)?;
    let recs = recommend::recommend_dosages(&kb, &profile);

    if human {
        println!("{}", output::human::format_dosages(&recs));
    } else {
        output::emit("dosage", json!({ "dosage_recommendations": recs }))?;
    }
    Ok(())
}

pub fn run_alternatives(args: &ProfileArgs, human: bool) -> Result<()> {
    let (kb, profile) = prepare(args)?;
    let alts = alternative::suggest_alternatives(&kb, &profile);

    if human {
        println!("{}", output::human::format_alternatives(&alts));
    } else {
        output::emit("alternatives", json!({ "alternative_medications": alts }))?;
    }
    Ok(())
}

pub fn run_analyze(args: &ProfileArgs, human: bool) -> Result<()> {
    let (kb, profile) = prepare(args)?;
    let report = analyze::comprehensive_analysis(&kb, &profile);

    if human {
        println!("{}", output::human::format_report(&report));
    } else {
        output::emit("analyze", serde_json::to_value(&report)?)?;
    }
    Ok(())
}
