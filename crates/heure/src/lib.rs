#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod heure;
pub mod normalize;
pub mod document;
mod path;

pub use crate::error::{Error, Result};
pub use crate::heure::{Heure, ParseHeureError};
pub use crate::normalize::{normalize_value, normalized};
pub use crate::options::{DEFAULT_YEAR, Options};

use std::io::{Read, Write};
use std::path::Path;

use tracing::info;

/// Parse JSON text, convert every `heure` field and render the result.
pub fn convert_str(s: &str, options: &Options) -> Result<String> {
    let mut v: serde_json::Value = serde_json::from_str(s)?;
    normalize_value(&mut v, options)?;
    let buf = crate::document::render_document(&v, options)?;
    // serde_json only emits valid UTF-8.
    String::from_utf8(buf).map_err(|e| Error::Message(e.to_string()))
}

pub fn convert_reader<R: Read>(reader: R, options: &Options) -> Result<serde_json::Value> {
    let mut v = crate::document::read_document(reader)?;
    normalize_value(&mut v, options)?;
    Ok(v)
}

pub fn convert_to_writer<R: Read, W: Write>(reader: R, writer: W, options: &Options) -> Result<usize> {
    let mut v = crate::document::read_document(reader)?;
    let n = normalize_value(&mut v, options)?;
    crate::document::write_document(writer, &v, options)?;
    Ok(n)
}

/// Convert `input` into `output`. Nothing is written unless the whole
/// document converts.
pub fn convert_file(input: &Path, output: &Path, options: &Options) -> Result<usize> {
    let mut v = crate::document::load_document(input)?;
    let n = normalize_value(&mut v, options)?;
    crate::document::save_document(output, &v, options)?;
    info!(input = %input.display(), output = %output.display(), converted = n, "document converted");
    Ok(n)
}
