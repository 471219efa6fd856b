use anyhow::Result;
use serde_json::json;

use rxcheck::core::regimen::{self, AddDrugParams};
use rxcheck::db::Database;
use rxcheck::models::config::Config;
use rxcheck::output;

pub fn run_add(name: &str, dose: Option<&str>, freq: Option<&str>, human: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;

    let entry = regimen::add_drug(
        &db,
        AddDrugParams {
            name,
            dosage: dose,
            frequency: freq,
        },
    )?;

    if human {
        println!(
            "Added {} {} {}",
            entry.name,
            entry.dosage.as_deref().unwrap_or("(no dose)"),
            entry.frequency.as_deref().unwrap_or("(no frequency)"),
        );
    } else {
        output::emit("med_add", json!({ "entry": entry }))?;
    }
    Ok(())
}

pub fn run_list(human: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let entries = regimen::list_drugs(&db)?;

    if human {
        println!("{}", output::human::format_regimen(&entries));
    } else {
        let count = entries.len();
        output::emit("med_list", json!({ "medications": entries, "count": count }))?;
    }
    Ok(())
}

pub fn run_remove(name: &str, human: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;

    if !regimen::remove_drug(&db, name)? {
        anyhow::bail!("Medication '{}' is not in the stored list.", name);
    }

    if human {
        println!("Removed {}", name.to_lowercase());
    } else {
        output::emit("med_remove", json!({ "name": name.to_lowercase(), "removed": true }))?;
    }
    Ok(())
}

pub fn run_clear(human: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let removed = regimen::clear_drugs(&db)?;

    if human {
        println!("Removed {} medication(s)", removed);
    } else {
        output::emit("med_clear", json!({ "removed": removed }))?;
    }
    Ok(())
}
