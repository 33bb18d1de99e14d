//! Patient record operations.

use rusqlite::{params, OptionalExtension};
use tracing::{debug, info};

use super::{Database, DbError, DbResult};
use crate::models::{BloodGroup, Gender, NewPatient, Patient};

impl Database {
    /// Insert a new patient and return the store-assigned id.
    ///
    /// The input is expected to already satisfy the validation rules; callers
    /// go through [`crate::validate::validate_patient`] first.
    pub fn insert_patient(&self, patient: &NewPatient) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO patients (name, age, gender, phone, address, blood_group)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                patient.name,
                patient.age,
                patient.gender.as_str(),
                patient.phone,
                patient.address,
                patient.blood_group.as_str(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        info!(id, "patient created");
        Ok(id)
    }

    /// Overwrite every field of the patient row matching `patient.id`.
    pub fn update_patient(&self, patient: &Patient) -> DbResult<()> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE patients SET
                name = ?2,
                age = ?3,
                gender = ?4,
                phone = ?5,
                address = ?6,
                blood_group = ?7
            WHERE id = ?1
            "#,
            params![
                patient.id,
                patient.name,
                patient.age,
                patient.gender.as_str(),
                patient.phone,
                patient.address,
                patient.blood_group.as_str(),
            ],
        )?;
        if rows_affected == 0 {
            return Err(DbError::NotFound(format!("no patient with id {}", patient.id)));
        }
        info!(id = patient.id, "patient updated");
        Ok(())
    }

    /// Delete a patient; the foreign-key cascade removes its visits in the
    /// same statement.
    pub fn delete_patient(&self, id: i64) -> DbResult<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM patients WHERE id = ?", [id])?;
        if rows_affected == 0 {
            return Err(DbError::NotFound(format!("no patient with id {id}")));
        }
        info!(id, "patient deleted");
        Ok(())
    }

    /// Get a patient by id.
    pub fn get_patient(&self, id: i64) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                r#"
                SELECT id, name, age, gender, phone, address, blood_group
                FROM patients
                WHERE id = ?
                "#,
                [id],
                map_patient_row,
            )
            .optional()?
            .map(Patient::try_from)
            .transpose()
    }

    /// List all patients, ascending id.
    pub fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, age, gender, phone, address, blood_group
            FROM patients
            ORDER BY id
            "#,
        )?;

        let rows = stmt.query_map([], map_patient_row)?;

        let mut patients = Vec::new();
        for row in rows {
            patients.push(row?.try_into()?);
        }
        Ok(patients)
    }

    /// Search patients whose name contains `term` (case-insensitive) or whose
    /// phone contains `term`, ascending id.
    ///
    /// `instr` keeps `%` and `_` in the term literal; this is substring
    /// matching, not pattern matching.
    pub fn search_patients(&self, term: &str) -> DbResult<Vec<Patient>> {
        debug!(term, "patient search");
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, age, gender, phone, address, blood_group
            FROM patients
            WHERE instr(lower(name), lower(?1)) > 0 OR instr(phone, ?1) > 0
            ORDER BY id
            "#,
        )?;

        let rows = stmt.query_map([term], map_patient_row)?;

        let mut patients = Vec::new();
        for row in rows {
            patients.push(row?.try_into()?);
        }
        Ok(patients)
    }
}

/// Intermediate row struct for database mapping.
struct PatientRow {
    id: i64,
    name: String,
    age: u32,
    gender: String,
    phone: String,
    address: String,
    blood_group: String,
}

fn map_patient_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PatientRow> {
    Ok(PatientRow {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        gender: row.get(3)?,
        phone: row.get(4)?,
        address: row.get(5)?,
        blood_group: row.get(6)?,
    })
}

impl TryFrom<PatientRow> for Patient {
    type Error = DbError;

    fn try_from(row: PatientRow) -> Result<Self, Self::Error> {
        let gender = Gender::parse(&row.gender)
            .ok_or_else(|| DbError::Constraint(format!("Unknown gender: {}", row.gender)))?;
        let blood_group = BloodGroup::parse(&row.blood_group).ok_or_else(|| {
            DbError::Constraint(format!("Unknown blood group: {}", row.blood_group))
        })?;

        Ok(Patient {
            id: row.id,
            name: row.name,
            age: row.age,
            gender,
            phone: row.phone,
            address: row.address,
            blood_group,
        })
    }
}
