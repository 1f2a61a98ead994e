//! Splitting an EPP document into its info block and sections.

use tracing::warn;

/// Marker that opens every section header.
pub const HEADER_TAG: &str = "[NAGLOWEK]";
/// Marker separating a section header from its content.
pub const CONTENT_TAG: &str = "[ZAWARTOSC]";
/// Marker that opens the export info block.
pub const INFO_TAG: &str = "[INFO]";

/// One header + content block of an EPP document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub header: String,
    pub content: String,
}

/// Raw structure of an EPP document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EppSections {
    /// Text after `[INFO]` in the preamble, empty if the marker is missing.
    pub info: String,
    /// Sections in document order.
    pub sections: Vec<Section>,
}

/// Split a document at its `[NAGLOWEK]` markers.
///
/// Blocks without a `[ZAWARTOSC]` marker are dropped.
pub fn split_sections(input: &str) -> EppSections {
    let mut blocks = input.split(HEADER_TAG);

    let info = blocks
        .next()
        .and_then(|preamble| {
            preamble
                .find(INFO_TAG)
                .map(|idx| preamble[idx + INFO_TAG.len()..].trim().to_string())
        })
        .unwrap_or_default();

    let sections = blocks
        .enumerate()
        .filter_map(|(idx, block)| match block.split_once(CONTENT_TAG) {
            Some((header, content)) => Some(Section {
                header: header.trim().to_string(),
                content: content.trim().to_string(),
            }),
            None => {
                warn!("Skipping block {} without {} marker", idx + 1, CONTENT_TAG);
                None
            }
        })
        .collect();

    EppSections { info, sections }
}
