//! Embedded metadata decoding
//!
//! Annotation comments may carry a JSON object overriding naming and
//! constraint defaults. Keys are matched case-insensitively (`tableName`,
//! `TableName` and `tablename` are the same key) and unknown keys are ignored.
//!
//! Decoding never fails. Empty text, malformed JSON and non-object JSON
//! produce the all-defaults record, and `Decoded` records which of those
//! happened so callers can log it. Inside a well-formed object, a field whose
//! value is `null` or of the wrong type keeps its default while the other
//! fields still apply.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Options carried by a declaration start comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeclarationOptions {
    #[serde(rename = "tablename", deserialize_with = "lenient")]
    pub table_name: String,
}

/// Options carried by a property comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PropertyOptions {
    #[serde(rename = "primarykey", deserialize_with = "lenient")]
    pub primary_key: bool,
    #[serde(deserialize_with = "lenient")]
    pub serial: bool,
    #[serde(deserialize_with = "lenient")]
    pub unique: bool,
    #[serde(rename = "maxlength", deserialize_with = "lenient")]
    pub max_length: u32,
    #[serde(rename = "numbertype", deserialize_with = "lenient")]
    pub number_type: String,
    #[serde(rename = "columnname", deserialize_with = "lenient")]
    pub column_name: String,
    #[serde(deserialize_with = "lenient")]
    pub fk: ForeignKeyOptions,
}

/// The `Fk` object of a property comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ForeignKeyOptions {
    /// Name of the referenced declaration
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub type_name: String,
    /// Referenced property (column) of that declaration
    #[serde(deserialize_with = "lenient")]
    pub property: String,
}

/// Outcome of decoding one metadata text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<T> {
    /// No metadata object was present
    Empty,
    /// The object decoded cleanly
    Parsed(T),
    /// The text could not be decoded; defaults apply
    Fallback { reason: String },
}

impl<T: Default> Decoded<T> {
    /// The decoded options, or defaults for `Empty` and `Fallback`
    pub fn into_options(self) -> T {
        match self {
            Decoded::Parsed(options) => options,
            Decoded::Empty | Decoded::Fallback { .. } => T::default(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Decoded::Fallback { .. })
    }
}

/// Decode declaration-level metadata
pub fn decode_declaration(text: &str) -> Decoded<DeclarationOptions> {
    decode(text)
}

/// Decode property-level metadata
pub fn decode_property(text: &str) -> Decoded<PropertyOptions> {
    decode(text)
}

/// Decode a metadata object into an options record.
pub fn decode<T: DeserializeOwned>(text: &str) -> Decoded<T> {
    let text = text.trim();
    if text.is_empty() {
        return Decoded::Empty;
    }

    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => return Decoded::Fallback { reason: e.to_string() },
    };

    if !value.is_object() {
        return Decoded::Fallback {
            reason: "metadata is not a JSON object".to_string(),
        };
    }

    match serde_json::from_value(lowercase_keys(value)) {
        Ok(options) => Decoded::Parsed(options),
        Err(e) => Decoded::Fallback { reason: e.to_string() },
    }
}

/// Decode one field, keeping the default when the value is `null` or does
/// not fit the field's type.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }

    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Ignoring metadata field of unexpected type");
        T::default()
    }))
}

/// Lowercase every object key, recursively. On a key collision the last
/// occurrence wins.
pub fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), lowercase_keys(value)))
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    }
}
