use crate::ports::QueryTransport;
use dnscrawler_domain::asn::{as_name_query, origin_query, parse_as_org, parse_origin_asn};
use dnscrawler_domain::endpoints::RECURSIVE_RESOLVER;
use dnscrawler_domain::{AsnInfo, DomainError, RecordData, RecordType};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Two-step Team Cymru lookup: origin AS of an address, then the AS name.
pub struct LookupAsnUseCase {
    transport: Arc<dyn QueryTransport>,
}

impl LookupAsnUseCase {
    pub fn new(transport: Arc<dyn QueryTransport>) -> Self {
        Self { transport }
    }

    /// `None` when the address is not an IP literal or the origin lookup
    /// yields nothing. A failed name lookup still returns the AS number.
    pub async fn execute(&self, ip: &str) -> Option<AsnInfo> {
        let addr: IpAddr = match ip.parse() {
            Ok(addr) => addr,
            Err(_) => {
                debug!(ip = %ip, "Not an IP literal, skipping ASN lookup");
                return None;
            }
        };

        let origin = match self.first_txt(&origin_query(addr)).await {
            Ok(Some(txt)) => txt,
            Ok(None) => {
                debug!(ip = %ip, "No origin answer");
                return None;
            }
            Err(e) => {
                debug!(ip = %ip, error = %e, "Origin lookup failed");
                return None;
            }
        };

        let number = parse_origin_asn(&origin)?;

        let org = match self.first_txt(&as_name_query(&number)).await {
            Ok(Some(txt)) => parse_as_org(&txt),
            Ok(None) => None,
            Err(e) => {
                debug!(asn = %number, error = %e, "AS name lookup failed");
                None
            }
        };

        Some(AsnInfo::new(&number, org))
    }

    /// First string of the first answer, if that answer is a TXT record.
    async fn first_txt(&self, name: &str) -> Result<Option<String>, DomainError> {
        let response = self
            .transport
            .query(RECURSIVE_RESOLVER, name, RecordType::TXT, true)
            .await?;

        Ok(match response.answers.first().map(|record| &record.data) {
            Some(RecordData::TXT(segments)) => segments.first().cloned(),
            _ => None,
        })
    }
}
