//! EPP (EDI++) parsing pipeline.
//!
//! A document is split into sections, each section line is tokenized as CSV
//! and the fields are mapped by position onto invoice models.

pub mod mapping;
mod parser;
pub mod rules;
pub mod sections;
pub mod tokenizer;

pub use mapping::{map_header, map_item};
pub use parser::EppParser;
pub use sections::{split_sections, EppSections, Section};
pub use tokenizer::tokenize_line;
