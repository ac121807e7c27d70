//! Domain operations.

use serde::{Deserialize, Serialize};

use crate::envelope::{deserialize_to_option_i64, deserialize_to_option_string};
use crate::{Client, ClientError, ResponseMeta, Status};

/// A domain hosted on DNSPod.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Domain {
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub punycode: Option<String>,
    pub grade: Option<String>,
    pub owner: Option<String>,
    pub ext_status: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_i64")]
    pub ttl: Option<i64>,
    #[serde(deserialize_with = "deserialize_to_option_i64")]
    pub min_ttl: Option<i64>,
    pub dnspod_ns: Vec<String>,
    pub status: Option<String>,
}

/// Counters DNSPod attaches to a domain listing.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DomainInfo {
    #[serde(deserialize_with = "deserialize_to_option_i64")]
    pub domain_total: Option<i64>,
    #[serde(deserialize_with = "deserialize_to_option_i64")]
    pub all_total: Option<i64>,
    #[serde(deserialize_with = "deserialize_to_option_i64")]
    pub mine_total: Option<i64>,
    #[serde(deserialize_with = "deserialize_to_option_i64")]
    pub share_total: Option<i64>,
    #[serde(deserialize_with = "deserialize_to_option_i64")]
    pub pause_total: Option<i64>,
    #[serde(deserialize_with = "deserialize_to_option_i64")]
    pub lock_total: Option<i64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DomainListResponse {
    pub status: Option<Status>,
    pub info: Option<DomainInfo>,
    pub domains: Vec<Domain>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DomainInfoResponse {
    pub status: Option<Status>,
    pub domain: Option<Domain>,
}

/// Options for [Domains::list].
#[derive(Debug, Default, Clone, Serialize)]
pub struct ListDomainsOptions {
    /// One of `all`, `mine`, `share`, `ismark`, `pause`, `vip`, `recent` or `share_out`.
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub offset: Option<u32>,
    pub length: Option<u32>,
    pub group_id: Option<String>,
    pub keyword: Option<String>,
}

/// Options for [Domains::info]. One of the two fields is enough.
#[derive(Debug, Default, Clone, Serialize)]
pub struct DomainInfoOptions {
    pub domain: Option<String>,
    pub domain_id: Option<String>,
}

/// Domain operations, borrowed from a [Client] with [Client::domains].
pub struct Domains<'a> {
    client: &'a Client,
}

impl<'a> Domains<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn list(
        &self,
        opt: &ListDomainsOptions,
    ) -> Result<(DomainListResponse, ResponseMeta), ClientError> {
        self.client.post("Domain.List", opt)
    }

    pub fn info(
        &self,
        opt: &DomainInfoOptions,
    ) -> Result<(DomainInfoResponse, ResponseMeta), ClientError> {
        self.client.post("Domain.Info", opt)
    }
}

#[cfg(test)]
mod tests;
