//! Clinic-Core Library
//!
//! Patient record store and query layer for a single-facility clinical front
//! desk. The presentation layer (forms, tables, dialogs) lives outside this
//! crate and consumes the typed API; it never touches storage directly.
//!
//! # Architecture
//!
//! ```text
//! Form input ──▶ validate ──▶ NewPatient / NewVisit
//!                                    │
//!                          ┌─────────▼─────────┐
//!                          │     Database      │
//!                          │  patients  visits │
//!                          │   (SQLite, FK     │
//!                          │    cascade)       │
//!                          └─────────┬─────────┘
//!                                    │
//!                    queries ◀───────┴───────▶ RosterExporter ──▶ CSV
//! ```
//!
//! Every store operation is synchronous and runs to completion before
//! returning. Deleting a patient removes its visit history in the same
//! statement; no partially-cascaded state is ever observable.
//!
//! # Modules
//!
//! - [`db`]: SQLite record stores (patient CRUD + search, visit history)
//! - [`models`]: Domain types (Patient, Visit, Gender, BloodGroup)
//! - [`validate`]: Form-input validation rules
//! - [`export`]: Roster CSV export

pub mod db;
pub mod export;
pub mod models;
pub mod validate;

// Re-export commonly used types
pub use db::{Database, DatabaseConfig, DbError, DbResult};
pub use export::{ExportError, RosterExporter};
pub use models::{BloodGroup, Gender, NewPatient, NewVisit, Patient, Visit};
pub use validate::{
    validate_patient, validate_visit, PatientForm, ValidationError, VisitForm,
};
