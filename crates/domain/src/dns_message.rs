use crate::dns_record::{RecordData, ResourceRecord};
use std::fmt;
use std::net::Ipv4Addr;

/// RCODE of a response header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u16),
}

impl ResponseCode {
    pub fn from_u16(code: u16) -> Self {
        match code {
            0 => Self::NoError,
            1 => Self::FormErr,
            2 => Self::ServFail,
            3 => Self::NXDomain,
            4 => Self::NotImp,
            5 => Self::Refused,
            other => Self::Other(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoError => "NOERROR",
            Self::FormErr => "FORMERR",
            Self::ServFail => "SERVFAIL",
            Self::NXDomain => "NXDOMAIN",
            Self::NotImp => "NOTIMP",
            Self::Refused => "REFUSED",
            Self::Other(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed DNS response, independent of the wire library that decoded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsMessage {
    pub id: u16,
    pub response_code: ResponseCode,
    pub truncated: bool,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl DnsMessage {
    pub fn new(id: u16, response_code: ResponseCode) -> Self {
        Self {
            id,
            response_code,
            truncated: false,
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    pub fn is_nxdomain(&self) -> bool {
        self.response_code == ResponseCode::NXDomain
    }

    /// NS targets from the answer section, or from the authority section
    /// when the answer carries none. Order follows the response.
    pub fn delegation_targets(&self) -> Vec<&str> {
        let from_answers = ns_targets(&self.answers);
        if from_answers.is_empty() {
            ns_targets(&self.authority)
        } else {
            from_answers
        }
    }

    /// First A record in the additional section whose owner is exactly `target`.
    pub fn glue_for(&self, target: &str) -> Option<Ipv4Addr> {
        self.additional.iter().find_map(|record| match &record.data {
            RecordData::A(addr) if record.name == target => Some(*addr),
            _ => None,
        })
    }
}

fn ns_targets(records: &[ResourceRecord]) -> Vec<&str> {
    records
        .iter()
        .filter_map(|record| match &record.data {
            RecordData::NS(target) => Some(target.as_str()),
            _ => None,
        })
        .collect()
}
