//! Decoding of Windows-1250 input.
//!
//! EPP exports are written in the Central European code page. Every byte
//! maps to a code point, so decoding only fails on I/O errors.

use std::io::Read;

use encoding_rs::WINDOWS_1250;
use encoding_rs_io::DecodeReaderBytesBuilder;
use tracing::debug;

use crate::error::{EppError, Result};

/// Read the whole stream and decode it from Windows-1250.
pub fn decode_windows_1250<R: Read>(reader: R) -> Result<String> {
    let mut decoder = DecodeReaderBytesBuilder::new()
        .encoding(Some(WINDOWS_1250))
        .build(reader);

    let mut text = String::new();
    decoder.read_to_string(&mut text).map_err(EppError::Read)?;

    debug!("Decoded {} characters", text.chars().count());
    Ok(text)
}
