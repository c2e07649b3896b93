// compliance-docgen/src/lib.rs
//
// Document generation engine for EU AI Act compliance artifacts: turns
// structured assessment answers or AI-authored sections into formatted,
// tiered DOCX documents.

pub mod assembly;
pub mod builders;
pub mod config;
pub mod enterprise;
pub mod error;
pub mod generators;
pub mod models;
pub mod pipeline;
pub mod style;
pub mod text;

pub use assembly::{artifact_filename, generate_document, generate_universal_document};
pub use error::{DocumentError, Result};
