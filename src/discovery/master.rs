// Mon Oct 19 2026 - Alex

use crate::discovery::{Candidate, ExtractError};
use serde_json::{Map, Value};

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn field<'a>(entry: &'a Map<String, Value>, index: usize, name: &'static str) -> Result<&'a Value, ExtractError> {
    entry
        .get(name)
        .ok_or(ExtractError::MissingField { index, field: name })
}

fn server_entry(index: usize, entry: &Value) -> Result<Candidate, ExtractError> {
    let entry = entry.as_object().ok_or(ExtractError::NotAnObject { index })?;

    let ip = match field(entry, index, "ip")? {
        Value::String(ip) => ip.clone(),
        _ => {
            return Err(ExtractError::WrongType {
                index,
                field: "ip",
                expected: "a string",
            })
        }
    };

    let port = match field(entry, index, "port")? {
        Value::String(port) => port.clone(),
        Value::Number(n) if n.is_u64() => n.to_string(),
        _ => {
            return Err(ExtractError::WrongType {
                index,
                field: "port",
                expected: "a string or a non-negative integer",
            })
        }
    };

    Ok(Candidate::new(ip, port))
}

/// Reads a master server listing: a JSON array of `{"ip": .., "port": ..}`.
///
/// Unlike the text dialects this one is strict. Malformed JSON or any
/// element without `ip`/`port` fails the whole payload.
pub fn master_server_api(content: &[u8]) -> Result<Vec<Candidate>, ExtractError> {
    let payload: Value = serde_json::from_slice(content)?;
    let entries = payload
        .as_array()
        .ok_or_else(|| ExtractError::NotAnArray(json_kind(&payload)))?;

    let candidates = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| server_entry(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("master server: {} candidates in {} bytes", candidates.len(), content.len());
    Ok(candidates)
}
