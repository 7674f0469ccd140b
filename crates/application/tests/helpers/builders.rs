use dnscrawler_domain::{DnsMessage, RecordData, ResourceRecord, ResponseCode};
use std::net::{IpAddr, SocketAddr};

pub fn server(ip: &str) -> SocketAddr {
    SocketAddr::new(ip.parse::<IpAddr>().unwrap(), 53)
}

pub fn ns(owner: &str, target: &str) -> ResourceRecord {
    ResourceRecord::new(owner, 172800, RecordData::NS(target.to_string()))
}

pub fn a(owner: &str, ip: &str) -> ResourceRecord {
    ResourceRecord::new(owner, 300, RecordData::A(ip.parse().unwrap()))
}

pub fn aaaa(owner: &str, ip: &str) -> ResourceRecord {
    ResourceRecord::new(owner, 300, RecordData::AAAA(ip.parse().unwrap()))
}

pub fn cname(owner: &str, target: &str) -> ResourceRecord {
    ResourceRecord::new(owner, 300, RecordData::CNAME(target.to_string()))
}

pub fn mx(owner: &str, preference: u16, exchange: &str) -> ResourceRecord {
    ResourceRecord::new(
        owner,
        300,
        RecordData::MX {
            preference,
            exchange: exchange.to_string(),
        },
    )
}

pub fn txt(owner: &str, segments: &[&str]) -> ResourceRecord {
    ResourceRecord::new(
        owner,
        300,
        RecordData::TXT(segments.iter().map(|s| s.to_string()).collect()),
    )
}

/// Fluent builder for scripted responses.
pub struct ResponseBuilder {
    message: DnsMessage,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            message: DnsMessage::new(0x1234, ResponseCode::NoError),
        }
    }

    pub fn nxdomain() -> Self {
        Self::new().rcode(ResponseCode::NXDomain)
    }

    pub fn rcode(mut self, rcode: ResponseCode) -> Self {
        self.message.response_code = rcode;
        self
    }

    pub fn answer(mut self, record: ResourceRecord) -> Self {
        self.message.answers.push(record);
        self
    }

    pub fn authority(mut self, record: ResourceRecord) -> Self {
        self.message.authority.push(record);
        self
    }

    pub fn additional(mut self, record: ResourceRecord) -> Self {
        self.message.additional.push(record);
        self
    }

    pub fn build(self) -> DnsMessage {
        self.message
    }
}
