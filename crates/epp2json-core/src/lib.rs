//! Core library for converting EPP (EDI++) accounting exports to JSON.
//!
//! This crate provides:
//! - Windows-1250 decoding of export files
//! - Section splitting, CSV tokenizing and positional field mapping
//! - Invoice data models serialized with the established JSON field names
//! - Read-only statistics over parsed invoices

pub mod encoding;
pub mod epp;
pub mod error;
pub mod export;
pub mod models;
pub mod query;

pub use epp::EppParser;
pub use error::{EppError, MalformedLine, Result};
pub use export::{convert_file, to_json, write_output};
pub use models::config::{EppConfig, OutputConfig, ParseOptions};
pub use models::invoice::{EppDocument, Invoice, InvoiceBrief, InvoiceItem};
pub use query::{InvoiceStats, Totals};
