use crate::error::{CalcError, CalcResult};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read the operations document and return its top-level object.
///
/// A leading UTF-8 byte order mark is skipped. Keys come back in document
/// order. The file handle is dropped before the JSON is parsed, so it is
/// released on every path.
pub fn load_operations_file(path: &Path) -> CalcResult<Map<String, Value>> {
    let bytes = read_file(path)?;
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);

    let text = std::str::from_utf8(bytes)
        .map_err(|_| CalcError::invalid("The file contains invalid JSON (not valid UTF-8)"))?;

    let text = text.trim();
    if text.is_empty() {
        return Err(CalcError::invalid("The file has no content"));
    }

    let doc: Value = serde_json::from_str(text).map_err(|e| {
        CalcError::invalid(format!(
            "The file contains invalid JSON (line {}, column {})",
            e.line(),
            e.column()
        ))
    })?;

    match doc {
        Value::Object(map) => {
            info!(path = %path.display(), entries = map.len(), "loaded operations file");
            Ok(map)
        }
        other => Err(CalcError::invalid(format!(
            "The JSON document must be an object of named operations, found {}",
            json_kind(&other)
        ))),
    }
}

fn read_file(path: &Path) -> CalcResult<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CalcError::NotFound(path.to_path_buf()),
        _ => CalcError::io(path, e),
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| CalcError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input");
    Ok(bytes)
}

pub(crate) fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
