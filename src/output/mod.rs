pub mod human;

use anyhow::Result;
use serde_json::{Value, json};

/// JSON envelope wrapped around every command result.
pub fn success(command: &str, data: Value) -> Value {
    json!({
        "status": "ok",
        "command": command,
        "data": data,
        "error": null
    })
}

pub fn error(command: &str, code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "command": command,
        "data": null,
        "error": {
            "code": code,
            "message": message
        }
    })
}

/// Print a success envelope on stdout as one line of JSON.
pub fn emit(command: &str, data: Value) -> Result<()> {
    println!("{}", serde_json::to_string(&success(command, data))?);
    Ok(())
}
