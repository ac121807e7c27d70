//! DNS record operations.
//!
//! See the [DNSPod record API](https://docs.dnspod.cn/api/record-list/).

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::domain::Domain;
use crate::envelope::deserialize_to_option_string;
use crate::{Client, ClientError, ResponseMeta, Status};

/// The routing line that applies to every resolver.
pub const DEFAULT_LINE: &str = "默认";

/// Record types the API accepts.
///
/// These are only for convenience: options take plain strings and nothing is
/// checked before a request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Cname,
    Mx,
    Txt,
    Ns,
    Aaaa,
    Srv,
    Caa,
    #[strum(serialize = "显性URL")]
    ExplicitUrl,
    #[strum(serialize = "隐性URL")]
    ImplicitUrl,
}

impl RecordType {
    /// Gets the string representation of the type.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl From<RecordType> for String {
    fn from(value: RecordType) -> Self {
        value.as_str().to_string()
    }
}

/// A DNS record as returned by the API.
///
/// Numeric fields arrive as numbers or as strings depending on the action, and
/// are kept as strings.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub ttl: Option<String>,
    pub value: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub enabled: Option<String>,
    pub status: Option<String>,
    pub updated_on: Option<String>,
    pub name: Option<String>,
    pub line: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub line_id: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub weight: Option<JsonValue>,
    pub monitor_status: Option<String>,
    pub remark: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub use_aqb: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub mx: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub hold: Option<String>,
}

/// Counters DNSPod attaches to record responses.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RecordInfo {
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub sub_domains: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub record_total: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub records_num: Option<String>,
}

/// Response body shared by every record operation.
///
/// `records` is filled by [Records::list], `record` by the other operations.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RecordResponse {
    pub status: Option<Status>,
    pub domain: Option<Domain>,
    pub info: Option<RecordInfo>,
    pub records: Vec<Record>,
    pub record: Option<Record>,
}

/// Options for [Records::list].
#[derive(Debug, Default, Clone, Serialize)]
pub struct ListRecordsOptions {
    pub domain: Option<String>,
    pub keyword: Option<String>,
}

/// Options for [Records::create].
#[derive(Debug, Default, Clone, Serialize)]
pub struct CreateRecordOptions {
    pub domain: Option<String>,
    pub sub_domain: Option<String>,
    pub record_type: Option<String>,
    pub record_line: Option<String>,
    pub value: Option<String>,
}

/// Options for [Records::modify].
#[derive(Debug, Default, Clone, Serialize)]
pub struct ModifyRecordOptions {
    pub domain: Option<String>,
    pub record_id: Option<String>,
    pub sub_domain: Option<String>,
    pub record_type: Option<String>,
    pub record_line: Option<String>,
    pub value: Option<String>,
}

/// Options for [Records::delete].
#[derive(Debug, Default, Clone, Serialize)]
pub struct DeleteRecordOptions {
    pub domain: Option<String>,
    pub record_id: Option<String>,
}

/// Record operations, borrowed from a [Client] with [Client::records].
pub struct Records<'a> {
    client: &'a Client,
}

impl<'a> Records<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists the records of a domain, optionally filtered by a keyword.
    pub fn list(
        &self,
        opt: &ListRecordsOptions,
    ) -> Result<(RecordResponse, ResponseMeta), ClientError> {
        self.client.post("Record.List", opt)
    }

    pub fn create(
        &self,
        opt: &CreateRecordOptions,
    ) -> Result<(RecordResponse, ResponseMeta), ClientError> {
        self.client.post("Record.Create", opt)
    }

    /// Modifies the record with the given id. Fields left as `None` are not sent.
    pub fn modify(
        &self,
        opt: &ModifyRecordOptions,
    ) -> Result<(RecordResponse, ResponseMeta), ClientError> {
        self.client.post("Record.Modify", opt)
    }

    /// Deletes the record with the given id.
    pub fn delete(
        &self,
        opt: &DeleteRecordOptions,
    ) -> Result<(RecordResponse, ResponseMeta), ClientError> {
        self.client.post("Record.Remove", opt)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn record_type_strings() {
        assert_eq!(RecordType::A.as_str(), "A");
        assert_eq!(RecordType::Cname.as_str(), "CNAME");
        assert_eq!(RecordType::Aaaa.to_string(), "AAAA");
        assert_eq!(String::from(RecordType::ImplicitUrl), "隐性URL");

        let all: Vec<&str> = RecordType::iter().map(|t| t.as_str()).collect();
        let mut deduped = all.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(all.len(), deduped.len());
    }

    #[test]
    fn record_response_decoding() {
        let body = r#"{
            "status": {"code": "1", "message": "Action completed successful", "created_at": "2024-01-01 00:00:00"},
            "domain": {"id": "9", "name": "example.com", "punycode": "example.com", "ttl": "600"},
            "info": {"sub_domains": "2", "record_total": "2", "records_num": "2"},
            "records": [
                {"id": "1", "name": "@", "type": "NS", "value": "f1g1ns1.dnspod.net.", "weight": null},
                {"id": 2, "name": "www", "type": "A", "value": "1.2.3.4", "weight": 10}
            ]
        }"#;

        let resp: RecordResponse = serde_json::from_str(body).unwrap();
        assert!(resp.status.unwrap().is_ok());
        assert_eq!(resp.domain.unwrap().ttl, Some(600));
        assert_eq!(resp.info.unwrap().record_total.as_deref(), Some("2"));
        assert_eq!(resp.records.len(), 2);
        assert_eq!(resp.records[1].id.as_deref(), Some("2"));
        assert_eq!(resp.records[1].type_.as_deref(), Some("A"));
        assert_eq!(resp.records[1].weight, Some(JsonValue::from(10)));
        assert!(resp.record.is_none());
    }

    #[test]
    fn numeric_fields_keep_the_envelope() {
        let body = r#"{
            "status": {"code": "1"},
            "info": {"sub_domains": 1, "record_total": 1, "records_num": "1"},
            "records": [{"id": "1", "ttl": 600, "enabled": 1, "line_id": 0, "mx": 10, "hold": "hold"}]
        }"#;

        let resp: RecordResponse = serde_json::from_str(body).unwrap();
        assert!(resp.status.unwrap().is_ok());
        let info = resp.info.unwrap();
        assert_eq!(info.record_total.as_deref(), Some("1"));
        assert_eq!(info.sub_domains.as_deref(), Some("1"));
        let record = &resp.records[0];
        assert_eq!(record.ttl.as_deref(), Some("600"));
        assert_eq!(record.enabled.as_deref(), Some("1"));
        assert_eq!(record.line_id.as_deref(), Some("0"));
        assert_eq!(record.mx.as_deref(), Some("10"));
        assert_eq!(record.hold.as_deref(), Some("hold"));
    }
}
