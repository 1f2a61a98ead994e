//! Document assembly: sections, tokenizing and mapping combined.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::encoding::decode_windows_1250;
use crate::error::{EppError, Result};
use crate::models::config::ParseOptions;
use crate::models::invoice::{EppDocument, Invoice};

use super::mapping::{map_header, map_item};
use super::sections::{split_sections, Section};
use super::tokenizer::tokenize_line;

/// EPP document parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct EppParser {
    options: ParseOptions,
}

/// Invoices collected so far while walking the sections.
#[derive(Debug, Default)]
struct Assembly {
    /// Invoice whose section was seen last; flushed when the next one starts.
    pending: Option<Invoice>,
    done: Vec<Invoice>,
}

impl Assembly {
    fn flush(&mut self) {
        if let Some(invoice) = self.pending.take().filter(|inv| !inv.kind.is_empty()) {
            self.done.push(invoice);
        }
    }

    fn finish(mut self) -> Vec<Invoice> {
        self.flush();
        self.done
    }
}

impl EppParser {
    /// Create a parser that includes every invoice type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with explicit options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Set whether purchase credit notes (KFZ) are included.
    pub fn with_purchase(mut self, include: bool) -> Self {
        self.options.include_purchase = include;
        self
    }

    /// Set whether sale credit notes (KFS) are included.
    pub fn with_sale(mut self, include: bool) -> Self {
        self.options.include_sale = include;
        self
    }

    /// Parse an already decoded EPP document.
    pub fn parse_str(&self, text: &str) -> Result<EppDocument> {
        let parsed = split_sections(text);
        let info = parse_info(&parsed.info)?;

        debug!("Found {} sections", parsed.sections.len());

        let invoices = parsed
            .sections
            .iter()
            .try_fold(Assembly::default(), |acc, section| self.step(acc, section))?
            .finish();

        info!(
            "Parsed {} invoices from {} sections",
            invoices.len(),
            parsed.sections.len()
        );

        Ok(EppDocument { info, invoices })
    }

    /// Decode a Windows-1250 byte stream and parse it.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<EppDocument> {
        let text = decode_windows_1250(reader)?;
        self.parse_str(&text)
    }

    /// Open, decode and parse an EPP file.
    pub fn parse_file(&self, path: &Path) -> Result<EppDocument> {
        info!("Parsing EPP file: {}", path.display());

        let file = File::open(path).map_err(|source| EppError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_reader(BufReader::new(file))
    }

    fn step(&self, mut acc: Assembly, section: &Section) -> Result<Assembly> {
        let header = section.header.trim();
        if header.is_empty() {
            return Ok(acc);
        }

        let fields = tokenize_line(header).map_err(EppError::Header)?;
        let Some(kind) = fields.first() else {
            return Ok(acc);
        };

        if !self.options.accepts(kind) {
            debug!("Skipping section of type {:?}", kind);
            return Ok(acc);
        }

        acc.flush();

        let mut invoice = map_header(&fields);
        let content = tokenize_line(&section.content).map_err(EppError::Item)?;
        // One content line per section, so at most one item.
        if !invoice.kind.is_empty() {
            invoice.items.push(map_item(&content));
        }

        debug!("Started invoice {} {}", invoice.kind, invoice.number);
        acc.pending = Some(invoice);
        Ok(acc)
    }
}

/// Extract `version`, `system` and `company` from the `[INFO]` line.
fn parse_info(line: &str) -> Result<BTreeMap<String, String>> {
    let fields = tokenize_line(line).map_err(EppError::Info)?;
    let mut info = BTreeMap::new();

    if fields.len() >= 2 {
        info.insert("version".to_string(), fields[0].clone());
        if let Some(system) = fields.get(3) {
            info.insert("system".to_string(), system.clone());
        }
        if let Some(company) = fields.get(5) {
            info.insert("company".to_string(), company.clone());
        }
    }

    Ok(info)
}
