//! Visit models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted visit, owned by exactly one patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    /// Store-assigned id
    pub id: i64,
    /// Owning patient's id
    pub patient_id: i64,
    /// Calendar date of the encounter (no time component)
    pub visit_date: NaiveDate,
    /// Attending doctor
    pub doctor: String,
    /// Free-form notes, may be empty
    pub notes: String,
}

/// A visit that has not been persisted yet (no id assigned).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewVisit {
    /// Owning patient's id
    pub patient_id: i64,
    /// Calendar date of the encounter
    pub visit_date: NaiveDate,
    /// Attending doctor
    pub doctor: String,
    /// Free-form notes, may be empty
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_date_serializes_as_plain_date() {
        let visit = NewVisit {
            patient_id: 1,
            visit_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            doctor: "Dr. Lee".into(),
            notes: String::new(),
        };
        let json = serde_json::to_string(&visit).unwrap();
        assert!(json.contains("\"2024-01-10\""));
    }
}
