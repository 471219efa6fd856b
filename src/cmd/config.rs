use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

use rxcheck::models::config::Config;
use rxcheck::models::knowledge::KnowledgeBase;
use rxcheck::output;

pub fn run_show(human: bool) -> Result<()> {
    let config = Config::load()?;
    if human {
        println!("{}", toml::to_string_pretty(&config)?);
    } else {
        output::emit("config", json!({ "config": config }))?;
    }
    Ok(())
}

pub fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "birth_year" => config.profile.birth_year = Some(value.parse()?),
        "conditions" => {
            config.profile.conditions = value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        "knowledge.path" => {
            if value.is_empty() {
                config.knowledge.path = None;
            } else {
                let path = PathBuf::from(value);
                // refuse a file that would break every later command
                KnowledgeBase::load(&path)?;
                config.knowledge.path = Some(path);
            }
        }
        _ => anyhow::bail!("unknown config key: {}", key),
    }

    config.save()?;
    output::emit("config", json!({ "key": key, "value": value }))
}
