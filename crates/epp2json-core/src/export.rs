//! JSON export of parsed documents.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::epp::EppParser;
use crate::error::{EppError, Result};
use crate::models::config::ParseOptions;

/// Serialize a value to JSON, indented with two spaces when `pretty`.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Parse an EPP file and serialize the resulting document.
pub fn convert_file(path: &Path, options: ParseOptions, pretty: bool) -> Result<String> {
    let document = EppParser::with_options(options).parse_file(path)?;
    to_json(&document, pretty)
}

/// Write converted output to `path`.
pub fn write_output(data: &[u8], path: &Path) -> Result<()> {
    std::fs::write(path, data).map_err(|source| EppError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}
