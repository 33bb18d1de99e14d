//! Roster export to CSV.

use std::fs;
use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::db::{Database, DbError, DbResult};

/// Export errors.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Column header row of the roster CSV.
const HEADER: &str = "ID,Name,Age,Gender,Phone,Blood Group,Address";

/// Roster exporter: serializes every patient to comma-separated text.
pub struct RosterExporter<'a> {
    db: &'a Database,
}

impl<'a> RosterExporter<'a> {
    /// Create a new roster exporter.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Render the full roster as CSV, header first, one row per patient in
    /// ascending-id order.
    pub fn to_csv(&self) -> DbResult<String> {
        let patients = self.db.list_patients()?;

        let mut csv = String::new();
        csv.push_str(HEADER);
        csv.push('\n');

        for p in &patients {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                p.id,
                escape_csv(&p.name),
                p.age,
                p.gender.as_str(),
                escape_csv(&p.phone),
                p.blood_group.as_str(),
                escape_csv(&p.address),
            ));
        }

        Ok(csv)
    }

    /// Write the roster to a caller-supplied destination stream.
    ///
    /// The roster is fully rendered before the first byte is written; a write
    /// failure discards the rendered data.
    pub fn export_to_writer<W: Write>(&self, mut out: W) -> Result<(), ExportError> {
        let csv = self.to_csv()?;
        out.write_all(csv.as_bytes())?;
        Ok(())
    }

    /// Write the roster to a file path, replacing any existing file.
    pub fn export_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let csv = self.to_csv()?;
        fs::write(&path, csv)?;
        info!(path = %path.as_ref().display(), "roster exported");
        Ok(())
    }
}

/// Escape a field for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
