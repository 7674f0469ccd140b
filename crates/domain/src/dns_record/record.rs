use super::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Decoded RDATA for the record types the crawler understands.
///
/// Names are kept fully qualified, trailing dot included, exactly as they
/// appear on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    NS(String),
    CNAME(String),
    PTR(String),
    MX { preference: u16, exchange: String },
    /// Character-strings of one TXT record, in wire order.
    TXT(Vec<String>),
    /// Any other type, identified by its wire code.
    Other(u16),
}

impl RecordData {
    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            RecordData::A(_) => Some(RecordType::A),
            RecordData::AAAA(_) => Some(RecordType::AAAA),
            RecordData::NS(_) => Some(RecordType::NS),
            RecordData::CNAME(_) => Some(RecordType::CNAME),
            RecordData::PTR(_) => Some(RecordType::PTR),
            RecordData::MX { .. } => Some(RecordType::MX),
            RecordData::TXT(_) => Some(RecordType::TXT),
            RecordData::Other(code) => RecordType::from_u16(*code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Owner name, fully qualified.
    pub name: String,

    pub ttl: u32,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        self.data.record_type()
    }
}
