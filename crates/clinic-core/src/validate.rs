//! Form-input validation.
//!
//! The presentation layer runs these checks before any create or update call
//! reaches the stores; the stores assume already-validated input. Rules run
//! in a fixed order and stop at the first violation, so one attempt reports
//! one problem.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{BloodGroup, Gender, NewPatient, NewVisit};

/// A validation rule violation. The message is renderable as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter patient name")]
    EmptyName,

    #[error("Please enter a valid age")]
    AgeNotANumber,

    #[error("Please enter a valid age (1-150)")]
    AgeOutOfRange,

    #[error("Please enter phone number")]
    EmptyPhone,

    #[error("Please enter a valid phone number (10-15 digits)")]
    InvalidPhone,

    #[error("Please enter doctor name")]
    EmptyDoctor,

    #[error("Please enter a valid visit date (YYYY-MM-DD)")]
    InvalidVisitDate,
}

/// Raw patient form input, as captured by the entry form.
///
/// Gender and blood group arrive as enum values because the form only offers
/// the enumerated choices; they need no rule of their own.
#[derive(Debug, Clone)]
pub struct PatientForm<'a> {
    pub name: &'a str,
    pub age: &'a str,
    pub gender: Gender,
    pub phone: &'a str,
    pub address: &'a str,
    pub blood_group: BloodGroup,
}

/// Check patient rules in order; on success produce the insertable record.
///
/// Rule order: name, age parse, age range, phone presence, phone format.
pub fn validate_patient(form: &PatientForm<'_>) -> Result<NewPatient, ValidationError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let age: i64 = form
        .age
        .trim()
        .parse()
        .map_err(|_| ValidationError::AgeNotANumber)?;
    if !(1..=150).contains(&age) {
        return Err(ValidationError::AgeOutOfRange);
    }

    let phone = form.phone.trim();
    if phone.is_empty() {
        return Err(ValidationError::EmptyPhone);
    }
    if !is_phone_number(phone) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(NewPatient {
        name: name.to_string(),
        age: age as u32,
        gender: form.gender,
        phone: phone.to_string(),
        address: form.address.trim().to_string(),
        blood_group: form.blood_group,
    })
}

/// Raw visit form input.
#[derive(Debug, Clone)]
pub struct VisitForm<'a> {
    pub patient_id: i64,
    pub visit_date: &'a str,
    pub doctor: &'a str,
    pub notes: &'a str,
}

/// Check visit rules; on success produce the insertable record.
///
/// The patient-exists precondition is the store's to enforce.
pub fn validate_visit(form: &VisitForm<'_>) -> Result<NewVisit, ValidationError> {
    let doctor = form.doctor.trim();
    if doctor.is_empty() {
        return Err(ValidationError::EmptyDoctor);
    }

    let visit_date = NaiveDate::parse_from_str(form.visit_date.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidVisitDate)?;

    Ok(NewVisit {
        patient_id: form.patient_id,
        visit_date,
        doctor: doctor.to_string(),
        notes: form.notes.trim().to_string(),
    })
}

/// 10 to 15 consecutive decimal digits, nothing else.
fn is_phone_number(s: &str) -> bool {
    (10..=15).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> PatientForm<'static> {
        PatientForm {
            name: "Jane Doe",
            age: "34",
            gender: Gender::Female,
            phone: "5551234567",
            address: "12 Elm St",
            blood_group: BloodGroup::OPositive,
        }
    }

    #[test]
    fn test_valid_form_converts() {
        let patient = validate_patient(&valid_form()).unwrap();
        assert_eq!(patient.name, "Jane Doe");
        assert_eq!(patient.age, 34);
        assert_eq!(patient.phone, "5551234567");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut form = valid_form();
        form.name = "  Jane Doe  ";
        form.age = " 34 ";
        form.phone = " 5551234567 ";

        let patient = validate_patient(&form).unwrap();
        assert_eq!(patient.name, "Jane Doe");
        assert_eq!(patient.age, 34);
        assert_eq!(patient.phone, "5551234567");
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut form = valid_form();
        form.name = "   ";
        assert_eq!(validate_patient(&form), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_unparseable_age_rejected() {
        let mut form = valid_form();
        form.age = "thirty";
        assert_eq!(validate_patient(&form), Err(ValidationError::AgeNotANumber));
    }

    #[test]
    fn test_age_out_of_range_rejected() {
        for age in ["0", "-5", "151"] {
            let mut form = valid_form();
            form.age = age;
            assert_eq!(
                validate_patient(&form),
                Err(ValidationError::AgeOutOfRange),
                "age {age} should be out of range"
            );
        }
        for age in ["1", "150"] {
            let mut form = valid_form();
            form.age = age;
            assert!(validate_patient(&form).is_ok(), "age {age} should pass");
        }
    }

    #[test]
    fn test_empty_phone_rejected() {
        let mut form = valid_form();
        form.phone = "";
        assert_eq!(validate_patient(&form), Err(ValidationError::EmptyPhone));
    }

    #[test]
    fn test_malformed_phone_rejected() {
        for phone in ["123456789", "1234567890123456", "555-123-4567", "55512345ab"] {
            let mut form = valid_form();
            form.phone = phone;
            assert_eq!(
                validate_patient(&form),
                Err(ValidationError::InvalidPhone),
                "phone {phone:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_phone_boundary_lengths_accepted() {
        for phone in ["1234567890", "123456789012345"] {
            let mut form = valid_form();
            form.phone = phone;
            assert!(validate_patient(&form).is_ok(), "phone {phone:?} should pass");
        }
    }

    #[test]
    fn test_first_violation_wins() {
        // Both name and phone are bad; the name rule runs first
        let mut form = valid_form();
        form.name = "";
        form.phone = "bad";
        assert_eq!(validate_patient(&form), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_address_is_unconstrained() {
        let mut form = valid_form();
        form.address = "";
        assert!(validate_patient(&form).is_ok());
    }

    #[test]
    fn test_visit_form_converts() {
        let visit = validate_visit(&VisitForm {
            patient_id: 1,
            visit_date: "2024-01-10",
            doctor: " Dr. Lee ",
            notes: "checkup",
        })
        .unwrap();
        assert_eq!(visit.doctor, "Dr. Lee");
        assert_eq!(visit.visit_date.to_string(), "2024-01-10");
    }

    #[test]
    fn test_empty_doctor_rejected() {
        let result = validate_visit(&VisitForm {
            patient_id: 1,
            visit_date: "2024-01-10",
            doctor: "  ",
            notes: "",
        });
        assert_eq!(result, Err(ValidationError::EmptyDoctor));
    }

    #[test]
    fn test_bad_visit_date_rejected() {
        for date in ["01/10/2024", "2024-13-01", "soon"] {
            let result = validate_visit(&VisitForm {
                patient_id: 1,
                visit_date: date,
                doctor: "Dr. Lee",
                notes: "",
            });
            assert_eq!(result, Err(ValidationError::InvalidVisitDate), "date {date:?}");
        }
    }
}
