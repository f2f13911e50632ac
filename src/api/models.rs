use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Lenient string field: accepts strings and numbers, anything else becomes None
fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize, Default)]
struct PhotoFields {
    #[serde(deserialize_with = "deserialize_optional_string", default)]
    id: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string", default)]
    title: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string", default)]
    url_m: Option<String>,
}

/// One entry of `photos.photo`
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub url_m: Option<String>,
    /// The entry as Flickr sent it, kept for error reporting
    pub raw: Value,
}

impl PhotoRecord {
    pub fn from_value(value: &Value) -> Self {
        let fields: PhotoFields = serde_json::from_value(value.clone()).unwrap_or_default();
        Self {
            id: fields.id,
            title: fields.title,
            url_m: fields.url_m,
            raw: value.clone(),
        }
    }
}

/// Lenient integer field: accepts numbers and numeric strings
fn deserialize_optional_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => Ok(n.as_i64()),
        Value::String(s) => Ok(s.trim().parse::<i64>().ok()),
        _ => Ok(None),
    }
}

/// Error envelope Flickr returns alongside `"stat": "fail"`
#[derive(Debug, Deserialize, Default)]
pub struct FlickrFailure {
    #[serde(deserialize_with = "deserialize_optional_string", default)]
    pub stat: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_code", default)]
    pub code: Option<i64>,
    #[serde(deserialize_with = "deserialize_optional_string", default)]
    pub message: Option<String>,
}

/// Read a result count that Flickr may encode as a number or a numeric string
pub fn count_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}
