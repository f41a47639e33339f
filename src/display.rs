//! Display module
//!
//! Derives presentation rows from a lookup record: the reserved photo field
//! is pulled out for image rendering, everything else is flattened, and each
//! dotted key is humanized into a title-case label. A record is never
//! mutated here; every render derives fresh rows.

use crate::error::{LookupError, Result};
use crate::flatten::{flatten, shape_of, ValueShape};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::GenericImageView;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

/// Default name of the reserved field holding the base64-encoded photo.
pub const PHOTO_FIELD: &str = "photo";

/// One rendered line: humanized label, original dotted key, value as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub label: String,
    pub key: String,
    pub value: String,
}

lazy_static! {
    // lower/digit followed by upper: "firstName" -> "first Name"
    static ref CAMEL_BOUNDARY: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    // acronym followed by a normal word: "NINNumber" -> "NIN Number"
    static ref ACRONYM_BOUNDARY: Regex = Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap();
    static ref SEPARATORS: Regex = Regex::new(r"[._\-\s]+").unwrap();
}

/// Humanize a dotted/camelCase/snake_case key into a display label.
///
/// `"holder.firstName"` becomes `"Holder First Name"`.
pub fn humanize(key: &str) -> String {
    let spaced = CAMEL_BOUNDARY.replace_all(key, "$1 $2");
    let spaced = ACRONYM_BOUNDARY.replace_all(&spaced, "$1 $2");
    SEPARATORS
        .split(&spaced)
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Stringify a leaf value: composites as their JSON text, strings bare,
/// everything else via its natural form.
pub fn stringify(value: &Value) -> String {
    match shape_of(value) {
        ValueShape::Composite | ValueShape::EmptyComposite => value.to_string(),
        ValueShape::Scalar => match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    }
}

/// Build the ordered row list for a record, photo field excluded.
pub fn display_rows(record: &Map<String, Value>, photo_field: &str) -> Vec<DisplayRow> {
    let mut without_photo = record.clone();
    without_photo.remove(photo_field);

    flatten(&without_photo)
        .iter()
        .map(|(key, value)| DisplayRow {
            label: humanize(key),
            key: key.clone(),
            value: stringify(value),
        })
        .collect()
}

/// Decoded photo with its probed pixel dimensions.
#[derive(Debug, Clone)]
pub struct Photo {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Extract and decode the reserved photo field, if present and non-empty.
///
/// The payload is base64 PNG; a leading `data:...;base64,` prefix is
/// tolerated and stripped before decoding.
pub fn extract_photo(record: &Map<String, Value>, photo_field: &str) -> Result<Option<Photo>> {
    let encoded = match record.get(photo_field).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => return Ok(None),
    };

    let payload = encoded.rsplit(',').next().unwrap_or(encoded);
    let bytes = BASE64
        .decode(payload)
        .map_err(|e| LookupError::PhotoDecode(e.to_string()))?;

    let probed = image::load_from_memory(&bytes)
        .map_err(|e| LookupError::PhotoDecode(e.to_string()))?;
    let (width, height) = probed.dimensions();

    Ok(Some(Photo {
        width,
        height,
        bytes,
    }))
}

/// Data URI for embedding the photo as an image source.
pub fn photo_data_uri(photo: &Photo) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(&photo.bytes))
}
