use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value as JsonValue;
use url::form_urlencoded;

use crate::EncodingError;

/// Form payload to send to the DNSPod API.
#[derive(Debug, Default)]
pub(crate) struct Payload {
    fields: BTreeMap<String, String>,
}

impl Payload {
    /// Flattens an options value into its non-empty fields.
    ///
    /// The options must serialize to a map whose values are strings, numbers,
    /// booleans or null. Nulls and empty strings are left out.
    pub(crate) fn from_options<T: Serialize + ?Sized>(opt: &T) -> Result<Self, EncodingError> {
        let map = match serde_json::to_value(opt)? {
            JsonValue::Null => return Ok(Self::default()),
            JsonValue::Object(map) => map,
            _ => return Err(EncodingError::NotAMap),
        };

        let mut fields = BTreeMap::new();
        for (key, value) in map {
            let value = match value {
                JsonValue::Null => continue,
                JsonValue::String(s) if s.is_empty() => continue,
                JsonValue::String(s) => s,
                JsonValue::Bool(b) => b.to_string(),
                JsonValue::Number(n) => n.to_string(),
                JsonValue::Array(_) | JsonValue::Object(_) => {
                    return Err(EncodingError::UnsupportedValue(key));
                }
            };
            fields.insert(key, value);
        }

        Ok(Self { fields })
    }

    /// Adds the given key-value pair, replacing any earlier value for the key.
    pub(crate) fn add(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Encodes the payload as `application/x-www-form-urlencoded`, keys sorted.
    pub(crate) fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.fields)
            .finish()
    }
}
