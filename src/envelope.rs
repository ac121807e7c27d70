use serde::{Deserialize, Deserializer};

/// The status block DNSPod puts in every response.
///
/// A `code` of `"1"` means the action succeeded; the HTTP status is 200 either way.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Status {
    pub code: Option<String>,
    pub message: Option<String>,
    pub created_at: Option<String>,
}

impl Status {
    pub fn is_ok(&self) -> bool {
        self.code.as_deref() == Some("1")
    }
}

/// Helper type for fields DNSPod sends either as numbers or as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrI64 {
    I64(i64),
    String(String),
}

/// Deserializes a number or a numeric string to an i64, treating `""` as absent.
pub(crate) fn deserialize_to_option_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    Ok(match Option::<StringOrI64>::deserialize(deserializer)? {
        Some(StringOrI64::I64(i)) => Some(i),
        Some(StringOrI64::String(s)) if s.is_empty() => None,
        Some(StringOrI64::String(s)) => Some(s.parse().map_err(D::Error::custom)?),
        None => None,
    })
}

/// Deserializes a string or a number to a string.
pub(crate) fn deserialize_to_option_string<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringOrI64>::deserialize(deserializer)? {
        Some(StringOrI64::I64(i)) => Some(i.to_string()),
        Some(StringOrI64::String(s)) => Some(s),
        None => None,
    })
}
