//! XFA Core - Low-level XFA datasets manipulation
//!
//! This crate provides functionality for:
//! - Opening and saving PDF form templates
//! - Locating the XFA `datasets` packet under `/AcroForm/XFA`
//! - Substituting field values into the datasets XML text
//!
//! # Example
//!
//! ```ignore
//! use xfa_core::XfaDocument;
//!
//! let mut doc = XfaDocument::open("template.pdf")?;
//! let report = doc.fill_fields([("_2_GradeRate", "LT")])?;
//! doc.save("filled.pdf")?;
//! ```

mod document;
mod patch;

pub use document::{fill_template, XfaDocument};
pub use patch::{escape_xml, patch_datasets, substitute_field, PatchReport, Substitution};

use thiserror::Error;

/// Label of the XFA packet holding the form's data values
pub const DATASETS_LABEL: &str = "datasets";

/// Errors that can occur during XFA operations
#[derive(Debug, Error)]
pub enum XfaError {
    #[error("Failed to open PDF: {0}")]
    OpenError(String),

    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Could not find datasets in XFA")]
    DatasetsNotFound,

    #[error("PDF parsing error: {0}")]
    ParseError(String),

    #[error("Datasets packet is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Fields not present in datasets: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),

    #[error("Invalid field pattern: {0}")]
    PatternError(#[from] regex::Error),
}

/// Result type for XFA operations
pub type Result<T> = std::result::Result<T, XfaError>;
