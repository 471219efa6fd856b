use anyhow::Result;
use rusqlite::Connection;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS regimen (
            id         TEXT PRIMARY KEY,
            name       TEXT NOT NULL UNIQUE,
            dosage     TEXT,
            frequency  TEXT,
            added_at   TEXT NOT NULL
        );",
    )?;
    Ok(())
}
