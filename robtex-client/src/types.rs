use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::datetime::from_unix_seconds;
use crate::utils::serde_ext::{flag, null_as_default};

/// Status string the service reports on a successful lookup.
const STATUS_OK: &str = "ok";

// ============ IP Query ============

/// Result of `GET /ipquery/{ip}`.
///
/// Current forward and reverse DNS for an IP address together with GEO-location
/// and routing data. Fields missing from the response or sent as `null` decode to
/// their zero value, list fields to an empty `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpQueryResult {
    /// Service status, `"ok"` on success.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    /// Origin AS number.
    #[serde(rename = "as", deserialize_with = "null_as_default")]
    pub as_number: u32,
    #[serde(rename = "asname", deserialize_with = "null_as_default")]
    pub as_name: String,
    /// WHOIS network description.
    #[serde(rename = "whoisdesc", deserialize_with = "null_as_default")]
    pub whois_desc: String,
    /// Route description.
    #[serde(rename = "routedesc", deserialize_with = "null_as_default")]
    pub route_desc: String,
    /// Covering prefix in the global BGP table.
    #[serde(rename = "bgproute", deserialize_with = "null_as_default")]
    pub bgp_route: String,
    /// Active forward DNS: names currently resolving to this IP.
    #[serde(rename = "act", deserialize_with = "null_as_default")]
    pub active_forward_dns: Vec<DnsItem>,
    /// Active DNS history.
    #[serde(rename = "acth", deserialize_with = "null_as_default")]
    pub active_dns_history: Vec<DnsItem>,
    /// Passive reverse DNS.
    #[serde(rename = "pas", deserialize_with = "null_as_default")]
    pub passive_reverse_dns: Vec<DnsItem>,
    /// Passive DNS history.
    #[serde(rename = "pash", deserialize_with = "null_as_default")]
    pub passive_dns_history: Vec<DnsItem>,
}

impl IpQueryResult {
    /// Whether the service reported `status: "ok"`.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// A host name observed for an IP, with the time it was seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsItem {
    /// Owner / origin name.
    #[serde(rename = "o", deserialize_with = "null_as_default")]
    pub owner: String,
    /// Unix timestamp (seconds).
    #[serde(rename = "t", deserialize_with = "null_as_default")]
    pub timestamp: i64,
}

impl DnsItem {
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        from_unix_seconds(self.timestamp)
    }
}

// ============ AS Query ============

/// Result of `GET /asquery/{number}`.
///
/// Networks related to an AS number. The service currently only returns networks
/// present in the global BGP table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsQueryResult {
    /// Service status, `"ok"` on success.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nets: Vec<NetworkPrefix>,
}

impl AsQueryResult {
    /// Whether the service reported `status: "ok"`.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Prefixes currently announced in the BGP table, in response order.
    pub fn bgp_prefixes(&self) -> impl Iterator<Item = &str> {
        self.nets
            .iter()
            .filter(|net| net.in_bgp)
            .map(|net| net.prefix.as_str())
    }
}

/// A network prefix announced by an AS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkPrefix {
    /// CIDR prefix, e.g. `"193.110.32.0/21"`.
    #[serde(rename = "n", deserialize_with = "null_as_default")]
    pub prefix: String,
    /// Present in the current BGP table. Sent as `0`/`1` by the service.
    #[serde(rename = "inbgp", with = "flag")]
    pub in_bgp: bool,
}

// ============ Passive DNS ============

/// One passive DNS observation.
///
/// Uses the Passive DNS Common Output Format field names
/// (<https://tools.ietf.org/html/draft-dulaunoy-dnsop-passive-dns-cof-03>).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassiveDnsRecord {
    /// Queried name.
    #[serde(deserialize_with = "null_as_default")]
    pub rrname: String,
    /// Resolved value.
    #[serde(deserialize_with = "null_as_default")]
    pub rrdata: String,
    /// Record type, e.g. `"A"`, `"AAAA"`.
    #[serde(deserialize_with = "null_as_default")]
    pub rrtype: String,
    /// First time the record was seen (Unix seconds).
    #[serde(deserialize_with = "null_as_default")]
    pub time_first: i64,
    /// Last time the record was seen (Unix seconds).
    #[serde(deserialize_with = "null_as_default")]
    pub time_last: i64,
    /// Number of times the record was observed.
    #[serde(deserialize_with = "null_as_default")]
    pub count: u64,
}

impl PassiveDnsRecord {
    pub fn first_seen(&self) -> Option<DateTime<Utc>> {
        from_unix_seconds(self.time_first)
    }

    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        from_unix_seconds(self.time_last)
    }
}
