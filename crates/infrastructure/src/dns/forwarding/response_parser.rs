use dnscrawler_domain::{DnsMessage, DomainError, RecordData, ResourceRecord, ResponseCode};
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use tracing::debug;

/// Decodes wire responses into the crawler's message model.
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsMessage, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let mut parsed = DnsMessage::new(
            message.id(),
            ResponseCode::from_u16(u16::from(message.response_code())),
        );
        parsed.truncated = message.truncated();
        parsed.answers = Self::convert_section(message.answers());
        parsed.authority = Self::convert_section(message.name_servers());
        parsed.additional = Self::convert_section(message.additionals());

        debug!(
            id = parsed.id,
            rcode = %parsed.response_code,
            answers = parsed.answers.len(),
            authority = parsed.authority.len(),
            additional = parsed.additional.len(),
            truncated = parsed.truncated,
            "DNS response parsed"
        );

        Ok(parsed)
    }

    fn convert_section(records: &[Record]) -> Vec<ResourceRecord> {
        records.iter().map(Self::convert_record).collect()
    }

    fn convert_record(record: &Record) -> ResourceRecord {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
            RData::NS(ns) => RecordData::NS(ns.0.to_ascii()),
            RData::CNAME(canonical) => RecordData::CNAME(canonical.0.to_ascii()),
            RData::PTR(ptr) => RecordData::PTR(ptr.0.to_ascii()),
            RData::MX(mx) => RecordData::MX {
                preference: mx.preference(),
                exchange: mx.exchange().to_ascii(),
            },
            RData::TXT(txt) => RecordData::TXT(
                txt.iter()
                    .map(|segment| String::from_utf8_lossy(segment).into_owned())
                    .collect(),
            ),
            _ => RecordData::Other(u16::from(record.record_type())),
        };

        ResourceRecord::new(record.name().to_ascii(), record.ttl(), data)
    }
}
