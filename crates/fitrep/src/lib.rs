//! FITREP form mapping
//!
//! This crate provides:
//! - Form record parsing from JSON
//! - The fixed table of NAVPERS 1610/2 template field names
//! - Mapping of a form record to template field values
//!
//! # Example
//!
//! ```ignore
//! use fitrep::{build_field_map, parse_form_record};
//!
//! let record = parse_form_record(r#"{"rateeName": "Doe, Jane", "status": "ACT"}"#)?;
//! let fields = build_field_map(&record);
//! assert_eq!(fields.get("_5_Status"), Some("1"));
//! ```

pub mod field_map;
pub mod fields;
mod mapper;
pub mod record;

pub use field_map::FieldMap;
pub use mapper::{build_field_map, trait_average};
pub use record::{parse_form_record, read_form_record, value_to_string, FormRecord};

use thiserror::Error;

/// Errors that can occur while reading a form record
#[derive(Debug, Error)]
pub enum FitrepError {
    #[error("Failed to parse form record: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Form record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for form record operations
pub type Result<T> = std::result::Result<T, FitrepError>;
