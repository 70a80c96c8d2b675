//! Whole-document load and save.
use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{Options, Result};

pub fn read_document<R: Read>(reader: R) -> Result<Value> {
    let v = serde_json::from_reader(reader)?;
    Ok(v)
}

pub fn load_document(path: &Path) -> Result<Value> {
    let f = File::open(path)?;
    read_document(BufReader::new(f))
}

/// Pretty-print `value` with `options.indent` spaces. Non-ASCII is written
/// as-is and no trailing newline is added.
pub fn render_document(value: &Value, options: &Options) -> Result<Vec<u8>> {
    let indent = vec![b' '; options.indent];
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
    value.serialize(&mut ser)?;
    Ok(out)
}

pub fn write_document<W: Write>(mut writer: W, value: &Value, options: &Options) -> Result<()> {
    let buf = render_document(value, options)?;
    writer.write_all(&buf)?;
    writer.flush()?;
    Ok(())
}

pub fn save_document(path: &Path, value: &Value, options: &Options) -> Result<()> {
    let buf = render_document(value, options)?;
    fs::write(path, buf)?;
    Ok(())
}
