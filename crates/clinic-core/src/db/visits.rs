//! Visit history operations.
//!
//! Visits are append-only once created; they are only removed by the owning
//! patient's cascade delete.

use rusqlite::params;
use tracing::info;

use super::{Database, DbError, DbResult};
use crate::models::{NewVisit, Visit};

impl Database {
    /// Insert a new visit and return the store-assigned id.
    ///
    /// `patient_id` must reference an existing patient; a foreign-key
    /// violation surfaces as [`DbError::ReferentialIntegrity`].
    pub fn insert_visit(&self, visit: &NewVisit) -> DbResult<i64> {
        self.conn
            .execute(
                r#"
                INSERT INTO visits (patient_id, visit_date, doctor, notes)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                params![visit.patient_id, visit.visit_date, visit.doctor, visit.notes],
            )
            .map_err(|e| foreign_key_to_integrity(e, visit.patient_id))?;
        let id = self.conn.last_insert_rowid();
        info!(id, patient_id = visit.patient_id, "visit recorded");
        Ok(id)
    }

    /// List all visits for a patient, most recent date first.
    ///
    /// Same-date visits keep a stable order (ascending id). A missing or
    /// deleted patient yields an empty list.
    pub fn list_visits_for_patient(&self, patient_id: i64) -> DbResult<Vec<Visit>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, visit_date, doctor, notes
            FROM visits
            WHERE patient_id = ?
            ORDER BY visit_date DESC, id
            "#,
        )?;

        let rows = stmt.query_map([patient_id], |row| {
            Ok(Visit {
                id: row.get(0)?,
                patient_id: row.get(1)?,
                visit_date: row.get(2)?,
                doctor: row.get(3)?,
                notes: row.get(4)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

fn foreign_key_to_integrity(err: rusqlite::Error, patient_id: i64) -> DbError {
    match err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            DbError::ReferentialIntegrity(format!("no patient with id {patient_id}"))
        }
        other => DbError::Sqlite(other),
    }
}
