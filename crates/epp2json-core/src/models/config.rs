//! Configuration structures for the conversion pipeline.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EppError, Result};

use super::invoice::{PURCHASE, PURCHASE_CORRECTION, SALE, SALE_CORRECTION};

/// Main configuration for epp2json.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EppConfig {
    /// Parsing options.
    pub parse: ParseOptions,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Which invoice types end up in the parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Include purchase credit notes (KFZ).
    pub include_purchase: bool,

    /// Include sale credit notes (KFS).
    pub include_sale: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            include_purchase: true,
            include_sale: true,
        }
    }
}

impl ParseOptions {
    /// Restrict to purchase documents: sale credit notes are dropped.
    pub fn purchase_only(self) -> Self {
        Self {
            include_sale: false,
            ..self
        }
    }

    /// Restrict to sale documents: purchase credit notes are dropped.
    pub fn sale_only(self) -> Self {
        Self {
            include_purchase: false,
            ..self
        }
    }

    /// Decide whether a section with the given type code is kept.
    ///
    /// `&&` binds tighter than `||` here, so the flags gate only the credit
    /// note variants. Base FZ and FS documents are accepted regardless of
    /// the flags; existing exports rely on this behavior.
    pub fn accepts(&self, kind: &str) -> bool {
        (kind == PURCHASE || kind == PURCHASE_CORRECTION && self.include_purchase)
            || (kind == SALE || kind == SALE_CORRECTION && self.include_sale)
    }
}

/// JSON output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Indent JSON output.
    pub pretty: bool,

    /// Output path used when none is given on the command line.
    pub default_output: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            default_output: PathBuf::from("faktury.json"),
        }
    }
}

impl EppConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| EppError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content)
            .map_err(|e| EppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| EppError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
