//! Team Cymru IP-to-ASN mapping over DNS.
//!
//! The origin lookup answers a TXT record shaped like
//! `"13335 | 104.16.0.0/13 | US | arin | 2014-03-28"`, the AS name lookup
//! one shaped like `"13335 | US | arin | 2010-07-14 | CLOUDFLARENET, US"`.

use serde::Serialize;
use std::fmt::Write;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::endpoints::{CYMRU_ASN_SUFFIX, CYMRU_ORIGIN6_SUFFIX, CYMRU_ORIGIN_SUFFIX};

const FIELD_SEPARATOR: &str = " | ";
const MAX_FIELDS: usize = 5;
const ORG_FIELD: usize = 4;

/// Autonomous system an address is announced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsnInfo {
    /// Always `"AS"` followed by decimal digits.
    pub asn: String,

    pub org: Option<String>,
}

impl AsnInfo {
    pub fn new(number: &str, org: Option<String>) -> Self {
        Self {
            asn: format!("AS{}", number),
            org: org.filter(|o| !o.is_empty()),
        }
    }

    /// Organization when known, otherwise the AS number.
    pub fn label(&self) -> &str {
        self.org.as_deref().unwrap_or(&self.asn)
    }
}

/// Origin query name for `ip`.
pub fn origin_query(ip: IpAddr) -> String {
    match ip {
        IpAddr::V4(v4) => origin_query_v4(v4),
        IpAddr::V6(v6) => origin_query_v6(v6),
    }
}

fn origin_query_v4(ip: Ipv4Addr) -> String {
    let [a, b, c, d] = ip.octets();
    format!("{}.{}.{}.{}{}", d, c, b, a, CYMRU_ORIGIN_SUFFIX)
}

fn origin_query_v6(ip: Ipv6Addr) -> String {
    format!("{}{}", reversed_nibbles(ip), CYMRU_ORIGIN6_SUFFIX)
}

/// All 32 nibbles of `ip`, least significant first, dot separated.
pub fn reversed_nibbles(ip: Ipv6Addr) -> String {
    let mut out = String::with_capacity(64);
    for (i, byte) in ip.octets().iter().rev().enumerate() {
        if i > 0 {
            out.push('.');
        }
        let _ = write!(out, "{:x}.{:x}", byte & 0x0f, byte >> 4);
    }
    out
}

/// AS name query for a bare AS number.
pub fn as_name_query(number: &str) -> String {
    format!("AS{}{}", number, CYMRU_ASN_SUFFIX)
}

fn split_fields(txt: &str) -> Vec<&str> {
    txt.splitn(MAX_FIELDS, FIELD_SEPARATOR).collect()
}

/// Bare AS number from an origin answer.
///
/// Multi-origin prefixes list several numbers in the first field; the
/// first one is kept.
pub fn parse_origin_asn(txt: &str) -> Option<String> {
    let first = split_fields(txt).into_iter().next()?.trim();
    let number = first.split_whitespace().next()?;
    if number.chars().all(|c| c.is_ascii_digit()) {
        Some(number.to_string())
    } else {
        None
    }
}

/// Organization from an AS name answer, when the fifth field is present.
pub fn parse_as_org(txt: &str) -> Option<String> {
    split_fields(txt)
        .get(ORG_FIELD)
        .map(|field| field.trim().to_string())
        .filter(|org| !org.is_empty())
}
