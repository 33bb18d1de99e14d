//! Patient models.

use serde::{Deserialize, Serialize};

/// Patient gender, as captured at the front desk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

impl Gender {
    /// All genders, in form display order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Single-letter label used on forms and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "O",
        }
    }

    /// Parse a stored label back into a gender.
    pub fn parse(s: &str) -> Option<Gender> {
        match s {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            "O" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// ABO/Rh blood group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    /// All blood groups, in form display order.
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    /// Label used on forms and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }

    /// Parse a stored label back into a blood group.
    pub fn parse(s: &str) -> Option<BloodGroup> {
        match s {
            "A+" => Some(BloodGroup::APositive),
            "A-" => Some(BloodGroup::ANegative),
            "B+" => Some(BloodGroup::BPositive),
            "B-" => Some(BloodGroup::BNegative),
            "AB+" => Some(BloodGroup::AbPositive),
            "AB-" => Some(BloodGroup::AbNegative),
            "O+" => Some(BloodGroup::OPositive),
            "O-" => Some(BloodGroup::ONegative),
            _ => None,
        }
    }
}

/// A persisted patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Store-assigned id, unique and never reused
    pub id: i64,
    /// Patient name
    pub name: String,
    /// Age in years, 1-150
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Phone number, 10-15 digits
    pub phone: String,
    /// Postal address, may be empty
    pub address: String,
    /// Blood group
    pub blood_group: BloodGroup,
}

/// A patient that has not been persisted yet (no id assigned).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPatient {
    /// Patient name
    pub name: String,
    /// Age in years, 1-150
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Phone number, 10-15 digits
    pub phone: String,
    /// Postal address, may be empty
    pub address: String,
    /// Blood group
    pub blood_group: BloodGroup,
}

impl Patient {
    /// Attach a store-assigned id to a new patient's fields.
    pub fn from_new(id: i64, new: NewPatient) -> Self {
        Self {
            id,
            name: new.name,
            age: new.age,
            gender: new.gender,
            phone: new.phone,
            address: new.address,
            blood_group: new.blood_group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_labels_round_trip() {
        for gender in Gender::ALL {
            assert_eq!(Gender::parse(gender.as_str()), Some(gender));
        }
        assert_eq!(Gender::parse("X"), None);
    }

    #[test]
    fn test_blood_group_labels_round_trip() {
        for group in BloodGroup::ALL {
            assert_eq!(BloodGroup::parse(group.as_str()), Some(group));
        }
        assert_eq!(BloodGroup::parse("C+"), None);
    }

    #[test]
    fn test_serde_uses_form_labels() {
        let json = serde_json::to_string(&BloodGroup::AbNegative).unwrap();
        assert_eq!(json, "\"AB-\"");
        let json = serde_json::to_string(&Gender::Other).unwrap();
        assert_eq!(json, "\"O\"");
    }

    #[test]
    fn test_from_new_preserves_fields() {
        let new = NewPatient {
            name: "Jane Doe".into(),
            age: 34,
            gender: Gender::Female,
            phone: "5551234567".into(),
            address: "12 Elm St".into(),
            blood_group: BloodGroup::OPositive,
        };
        let patient = Patient::from_new(7, new.clone());
        assert_eq!(patient.id, 7);
        assert_eq!(patient.name, new.name);
        assert_eq!(patient.blood_group, new.blood_group);
    }
}
