use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::params;

use crate::models::regimen::RegimenEntry;

use super::Database;

struct RegimenRow {
    id: String,
    name: String,
    dosage: Option<String>,
    frequency: Option<String>,
    added_at: String,
}

fn row_to_entry(r: RegimenRow) -> Result<RegimenEntry> {
    let added_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&r.added_at)?.with_timezone(&Utc);
    Ok(RegimenEntry {
        id: r.id,
        name: r.name,
        dosage: r.dosage,
        frequency: r.frequency,
        added_at,
    })
}

impl Database {
    /// Insert an entry, or update dosage and frequency of the entry with the
    /// same name. An updated entry keeps its id and position.
    pub fn upsert_regimen_entry(&self, entry: &RegimenEntry) -> Result<()> {
        self.conn.execute(
            "INSERT INTO regimen (id, name, dosage, frequency, added_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(name) DO UPDATE SET dosage = excluded.dosage, frequency = excluded.frequency",
            params![
                entry.id,
                entry.name,
                entry.dosage,
                entry.frequency,
                entry.added_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn get_regimen_entry(&self, name: &str) -> Result<Option<RegimenEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, dosage, frequency, added_at FROM regimen WHERE name = ?1",
        )?;
        let mut rows = stmt.query_map(params![name], |row| {
            Ok(RegimenRow {
                id: row.get(0)?,
                name: row.get(1)?,
                dosage: row.get(2)?,
                frequency: row.get(3)?,
                added_at: row.get(4)?,
            })
        })?;
        match rows.next() {
            Some(row) => Ok(Some(row_to_entry(row?)?)),
            None => Ok(None),
        }
    }

    /// Entries in the order they were first added.
    pub fn list_regimen(&self) -> Result<Vec<RegimenEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, dosage, frequency, added_at FROM regimen ORDER BY rowid ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(RegimenRow {
                id: row.get(0)?,
                name: row.get(1)?,
                dosage: row.get(2)?,
                frequency: row.get(3)?,
                added_at: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row_to_entry(row?)?);
        }
        Ok(entries)
    }

    pub fn remove_regimen_entry(&self, name: &str) -> Result<bool> {
        let count = self
            .conn
            .execute("DELETE FROM regimen WHERE name = ?1", params![name])?;
        Ok(count > 0)
    }

    pub fn clear_regimen(&self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM regimen", [])?)
    }
}
