use anyhow::Result;
use std::io::{self, Write};

use rxcheck::db::Database;
use rxcheck::models::config::Config;

pub fn run(skip: bool) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();

    if !skip {
        println!("rxcheck — Initial Setup\n");

        config.profile.birth_year = Some(prompt_u16("Birth year")?);

        let conditions = prompt_string("Known conditions (comma separated, or empty)")?;
        if !conditions.is_empty() {
            config.profile.conditions = conditions
                .split(',')
                .map(|s| s.trim().to_string())
                .collect();
        }

        config.save()?;
        Database::open(&Config::db_path())?;

        println!("\nSetup complete. Data stored in {:?}", Config::data_dir());
    } else {
        config.save()?;
        Database::open(&Config::db_path())?;
        println!("Config initialized with defaults at {:?}", Config::path());
    }

    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

fn prompt_u16(label: &str) -> Result<u16> {
    loop {
        let s = prompt_string(label)?;
        match s.parse::<u16>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Please enter a year, e.g. 1970."),
        }
    }
}
