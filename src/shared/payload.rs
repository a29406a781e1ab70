/**
 * Feature Request Payloads
 *
 * Decoding and validation of the JSON bodies accepted by the create and
 * update endpoints. Bodies are read as a generic JSON object first so that
 * every field can be checked and reported individually instead of failing on
 * the first type mismatch.
 *
 * # Field Rules
 *
 * - Value must be a JSON string
 * - Value may not be `null`
 * - Value is trimmed and may not be blank
 * - `title` is limited to 200 characters
 *
 * Unknown fields and read-only fields (`id`, `vote_count`, timestamps) are
 * ignored.
 */
use serde_json::{Map, Value};

use crate::shared::error::{SharedError, ValidationErrors};

/// Maximum length of a feature title, in characters
pub const TITLE_MAX_CHARS: usize = 200;

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const NOT_BLANK: &str = "This field may not be blank.";
const NOT_STRING: &str = "Not a valid string.";

/// How missing fields are treated during an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Every writable field must be supplied (PUT)
    Full,
    /// Only supplied fields are validated and written (PATCH)
    Partial,
}

/// A validated creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeature {
    pub title: String,
    pub description: String,
}

/// A validated set of field replacements
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureChanges {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl NewFeature {
    /// Decode and validate a creation body
    pub fn from_json(body: &[u8]) -> Result<Self, SharedError> {
        let changes = FeatureChanges::from_json(body, UpdateMode::Full)?;
        match (changes.title, changes.description) {
            (Some(title), Some(description)) => Ok(Self { title, description }),
            // Full mode reports missing fields before returning
            _ => Err(SharedError::validation("non_field_errors", REQUIRED)),
        }
    }
}

impl FeatureChanges {
    /// Decode and validate an update body
    pub fn from_json(body: &[u8], mode: UpdateMode) -> Result<Self, SharedError> {
        let object = parse_object(body)?;
        let required = mode == UpdateMode::Full;
        let mut errors = ValidationErrors::new();

        let title = text_field(&object, "title", Some(TITLE_MAX_CHARS), required, &mut errors);
        let description = text_field(&object, "description", None, required, &mut errors);

        errors.into_result(Self { title, description })
    }

    /// True when no field would be written
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

/// Read a body as a JSON object
///
/// An empty body is treated as an empty object, so missing-field errors are
/// reported rather than a parse failure.
pub fn parse_object(body: &[u8]) -> Result<Map<String, Value>, SharedError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(body)? {
        Value::Object(object) => Ok(object),
        other => Err(SharedError::malformed(format!(
            "Invalid data. Expected a dictionary, but got {}.",
            json_type_name(&other)
        ))),
    }
}

fn text_field(
    object: &Map<String, Value>,
    name: &str,
    max_chars: Option<usize>,
    required: bool,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let value = match object.get(name) {
        Some(value) => value,
        None => {
            if required {
                errors.add(name, REQUIRED);
            }
            return None;
        }
    };

    let text = match value {
        Value::String(text) => text.trim(),
        Value::Null => {
            errors.add(name, NOT_NULL);
            return None;
        }
        _ => {
            errors.add(name, NOT_STRING);
            return None;
        }
    };

    if text.is_empty() {
        errors.add(name, NOT_BLANK);
        return None;
    }

    if let Some(max) = max_chars {
        if text.chars().count() > max {
            errors.add(
                name,
                format!("Ensure this field has no more than {max} characters."),
            );
            return None;
        }
    }

    Some(text.to_string())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
