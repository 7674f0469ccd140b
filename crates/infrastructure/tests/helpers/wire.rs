use std::net::{Ipv4Addr, Ipv6Addr};

pub const TYPE_A: u16 = 1;
pub const TYPE_NS: u16 = 2;
pub const TYPE_CNAME: u16 = 5;
pub const TYPE_PTR: u16 = 12;
pub const TYPE_MX: u16 = 15;
pub const TYPE_TXT: u16 = 16;
pub const TYPE_AAAA: u16 = 28;

const FLAGS_NOERROR: u16 = 0x8180;
const FLAG_TC: u16 = 0x0200;
const RCODE_NXDOMAIN: u16 = 3;

/// Hand-assembled response datagram. Names are never compressed.
pub struct WireResponse {
    id: u16,
    flags: u16,
    question: Vec<u8>,
    answers: Vec<Vec<u8>>,
    authority: Vec<Vec<u8>>,
    additional: Vec<Vec<u8>>,
}

impl WireResponse {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: FLAGS_NOERROR,
            question: Vec::new(),
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    /// Echo the ID and question section of a query.
    pub fn reply_to(query: &[u8]) -> Self {
        let mut response = Self::new(u16::from_be_bytes([query[0], query[1]]));
        response.question = query[12..].to_vec();
        response
    }

    pub fn with_id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn nxdomain(mut self) -> Self {
        self.flags = (self.flags & !0x000f) | RCODE_NXDOMAIN;
        self
    }

    pub fn truncated(mut self) -> Self {
        self.flags |= FLAG_TC;
        self
    }

    pub fn answer(mut self, record: Vec<u8>) -> Self {
        self.answers.push(record);
        self
    }

    pub fn authority(mut self, record: Vec<u8>) -> Self {
        self.authority.push(record);
        self
    }

    pub fn additional(mut self, record: Vec<u8>) -> Self {
        self.additional.push(record);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let qdcount: u16 = if self.question.is_empty() { 0 } else { 1 };
        let mut out = Vec::with_capacity(512);
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        out.extend_from_slice(&qdcount.to_be_bytes());
        out.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.authority.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.additional.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.question);
        for record in self
            .answers
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
        {
            out.extend_from_slice(record);
        }
        out
    }
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

pub fn record(owner: &str, rtype: u16, rdata: &[u8]) -> Vec<u8> {
    let mut out = encode_name(owner);
    out.extend_from_slice(&rtype.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&300u32.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(rdata);
    out
}

pub fn a(owner: &str, ip: &str) -> Vec<u8> {
    let ip: Ipv4Addr = ip.parse().unwrap();
    record(owner, TYPE_A, &ip.octets())
}

pub fn aaaa(owner: &str, ip: &str) -> Vec<u8> {
    let ip: Ipv6Addr = ip.parse().unwrap();
    record(owner, TYPE_AAAA, &ip.octets())
}

pub fn ns(owner: &str, target: &str) -> Vec<u8> {
    record(owner, TYPE_NS, &encode_name(target))
}

pub fn cname(owner: &str, target: &str) -> Vec<u8> {
    record(owner, TYPE_CNAME, &encode_name(target))
}

pub fn ptr(owner: &str, target: &str) -> Vec<u8> {
    record(owner, TYPE_PTR, &encode_name(target))
}

pub fn mx(owner: &str, preference: u16, exchange: &str) -> Vec<u8> {
    let mut rdata = preference.to_be_bytes().to_vec();
    rdata.extend_from_slice(&encode_name(exchange));
    record(owner, TYPE_MX, &rdata)
}

pub fn txt(owner: &str, segments: &[&str]) -> Vec<u8> {
    let mut rdata = Vec::new();
    for segment in segments {
        rdata.push(segment.len() as u8);
        rdata.extend_from_slice(segment.as_bytes());
    }
    record(owner, TYPE_TXT, &rdata)
}
