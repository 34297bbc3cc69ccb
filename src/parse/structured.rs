//! JSON-LD structured data parsing.
//!
//! Payloads come from `<script type="application/ld+json">` elements and are
//! kept as raw text in the snapshot. Parsing happens here so a malformed
//! payload can be reported on its own without affecting the others.

use serde::de::Error as _;
use serde_json::Value;

/// MIME type identifying a JSON-LD script element.
pub const JSON_LD_MIME_TYPE: &str = "application/ld+json";

/// Returns true when a `<script type=...>` value denotes JSON-LD.
///
/// Comparison is ASCII case-insensitive and ignores surrounding whitespace.
pub fn is_json_ld_type(type_attr: &str) -> bool {
    type_attr.trim().eq_ignore_ascii_case(JSON_LD_MIME_TYPE)
}

/// Parses one JSON-LD payload and returns the Schema.org types it declares.
///
/// A top-level object contributes its `@type` (a string, or each string of an
/// array). A top-level array contributes the types of each object element.
/// Valid JSON without any `@type` yields an empty list.
///
/// # Errors
///
/// Returns the `serde_json` error when the payload is not valid JSON, or when
/// it is the JSON literal `null`.
pub fn parse_schema_types(payload: &str) -> Result<Vec<String>, serde_json::Error> {
    let value: Value = serde_json::from_str(payload.trim())?;

    let mut schema_types = Vec::new();
    match &value {
        Value::Null => return Err(serde_json::Error::custom("JSON-LD payload is null")),
        Value::Array(items) => {
            for item in items {
                collect_types(item, &mut schema_types);
            }
        }
        other => collect_types(other, &mut schema_types),
    }
    Ok(schema_types)
}

fn collect_types(value: &Value, out: &mut Vec<String>) {
    let Some(type_value) = value.as_object().and_then(|obj| obj.get("@type")) else {
        return;
    };
    if let Some(type_str) = type_value.as_str() {
        out.push(type_str.to_string());
    } else if let Some(type_array) = type_value.as_array() {
        out.extend(
            type_array
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string),
        );
    }
}
