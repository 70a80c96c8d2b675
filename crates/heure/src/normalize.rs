use serde_json::{Map, Value};
use tracing::debug;

use crate::heure::Heure;
use crate::path::JsonPath;
use crate::{Error, Options, Result};

pub const HEURE_KEY: &str = "heure";
pub const DATE_KEY: &str = "date";
pub const TIME_KEY: &str = "time";

/// Rewrite every `heure` field below `value` into `date` and `time`, in place.
///
/// Returns how many fields were converted. On error `value` may already hold
/// some converted objects; use [`normalized`] to keep the input untouched.
pub fn normalize_value(value: &mut Value, options: &Options) -> Result<usize> {
    options.validate()?;
    let mut path = JsonPath::root();
    let mut converted = 0;
    walk(value, options, &mut path, &mut converted)?;
    Ok(converted)
}

/// Like [`normalize_value`] but returns a converted copy.
pub fn normalized(value: &Value, options: &Options) -> Result<Value> {
    let mut out = value.clone();
    normalize_value(&mut out, options)?;
    Ok(out)
}

fn walk(value: &mut Value, options: &Options, path: &mut JsonPath, converted: &mut usize) -> Result<()> {
    match value {
        Value::Object(map) => {
            if convert_object(map, options, path)? {
                *converted += 1;
            }
            for (k, v) in map.iter_mut() {
                let mark = path.push_key(k);
                walk(v, options, path, converted)?;
                path.truncate(mark);
            }
        }
        Value::Array(items) => {
            for (idx, v) in items.iter_mut().enumerate() {
                let mark = path.push_index(idx);
                walk(v, options, path, converted)?;
                path.truncate(mark);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
    Ok(())
}

fn convert_object(map: &mut Map<String, Value>, options: &Options, path: &JsonPath) -> Result<bool> {
    let heure = match map.get(HEURE_KEY) {
        None => return Ok(false),
        Some(Value::String(s)) => Heure::parse(s, options.year).map_err(|e| Error::Parse {
            path: path.as_str().to_string(),
            value: e.value,
            message: e.reason,
        })?,
        Some(other) => {
            return Err(Error::InvalidType {
                path: path.as_str().to_string(),
                found: type_name(other),
            });
        }
    };

    // shift_remove keeps the remaining keys in their original order.
    map.shift_remove(HEURE_KEY);
    let date = heure.date_string(options.year);
    let time = heure.time_string();
    debug!(path = path.as_str(), %date, %time, "converted heure");
    map.insert(DATE_KEY.to_string(), Value::String(date));
    map.insert(TIME_KEY.to_string(), Value::String(time));
    Ok(true)
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
