use anyhow::Result;
use serde_json::json;
use std::io::Read;

use rxcheck::core::{extract, regimen};
use rxcheck::db::Database;
use rxcheck::models::config::Config;
use rxcheck::output;

pub fn run(text: Option<&str>, add: bool, human: bool) -> Result<()> {
    let text = match text {
        Some(t) if t != "-" => t.to_string(),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let drugs = extract::extract_drugs_from_text(&text);

    let stored = if add && !drugs.is_empty() {
        let db = Database::open(&Config::db_path())?;
        Some(regimen::store_extracted(&db, &drugs)?)
    } else {
        None
    };

    if human {
        println!("{}", output::human::format_extracted(&drugs));
        if let Some(entries) = &stored {
            println!("\nStored list now has {} medication(s).", entries.len());
        }
    } else {
        let mut data = json!({ "drugs": drugs, "count": drugs.len() });
        if let Some(entries) = stored {
            data["stored"] = json!(entries);
        }
        output::emit("extract", data)?;
    }
    Ok(())
}
