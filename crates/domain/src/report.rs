use serde::Serialize;

use crate::asn::AsnInfo;
use crate::nameserver::Nameserver;
use crate::trace::TraceStep;

/// Outcome of one lookup section: what was found, or why nothing was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Section<T> {
    pub fn ok(items: Vec<T>) -> Self {
        Self { items, error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameserverEntry {
    #[serde(flatten)]
    pub nameserver: Nameserver,
    pub asn: Option<AsnInfo>,
}

/// An A or AAAA value with its reverse name and origin AS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressEntry {
    pub address: String,
    pub hostname: Option<String>,
    pub asn: Option<AsnInfo>,
}

impl AddressEntry {
    pub fn bare(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            hostname: None,
            asn: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordsReport {
    pub cname: Vec<String>,
    pub a: Vec<AddressEntry>,
    pub aaaa: Vec<AddressEntry>,
    pub mx: Vec<String>,
    pub txt: Vec<String>,
}

impl RecordsReport {
    pub fn is_empty(&self) -> bool {
        self.cname.is_empty()
            && self.a.is_empty()
            && self.aaaa.is_empty()
            && self.mx.is_empty()
            && self.txt.is_empty()
    }
}

/// Everything gathered about one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainReport {
    pub domain: String,
    pub registered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Section<NameserverEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Section<TraceStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<RecordsReport>,
}

impl DomainReport {
    pub fn unregistered(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            registered: false,
            nameservers: None,
            trace: None,
            records: None,
        }
    }
}
