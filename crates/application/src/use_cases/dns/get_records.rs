use crate::ports::QueryTransport;
use dnscrawler_domain::endpoints::RECURSIVE_RESOLVER;
use dnscrawler_domain::records::{condense_txt, format_mx};
use dnscrawler_domain::{fqdn, trim_root, DnsMessage, RecordData, RecordType, Records};
use std::sync::Arc;
use tracing::warn;

/// Condensed A, AAAA, MX, TXT and CNAME view of a domain.
pub struct GetRecordsUseCase {
    transport: Arc<dyn QueryTransport>,
}

impl GetRecordsUseCase {
    pub fn new(transport: Arc<dyn QueryTransport>) -> Self {
        Self { transport }
    }

    /// Never fails: a query that errors leaves its field empty.
    pub async fn execute(&self, domain: &str) -> Records {
        let name = fqdn(domain);

        let a = self.fetch(&name, RecordType::A).await;
        let aaaa = self.fetch(&name, RecordType::AAAA).await;
        let mx = self.fetch(&name, RecordType::MX).await;
        let txt = self.fetch(&name, RecordType::TXT).await;
        let cname = self.fetch(&name, RecordType::CNAME).await;

        Records {
            a: a.map(|r| values_of_type(&r, RecordType::A)).unwrap_or_default(),
            aaaa: aaaa
                .map(|r| values_of_type(&r, RecordType::AAAA))
                .unwrap_or_default(),
            cname: cname
                .map(|r| values_of_type(&r, RecordType::CNAME))
                .unwrap_or_default(),
            mx: mx.map(|r| mx_values(&r)).unwrap_or_default(),
            txt: txt.map(|r| txt_values(&r)).unwrap_or_default(),
        }
    }

    async fn fetch(&self, name: &str, record_type: RecordType) -> Option<DnsMessage> {
        match self
            .transport
            .query(RECURSIVE_RESOLVER, name, record_type, true)
            .await
        {
            Ok(response) => Some(response),
            Err(e) => {
                warn!(domain = %name, record_type = %record_type, error = %e, "Record query failed");
                None
            }
        }
    }
}

/// Answer values of one address or alias type, as display strings.
fn values_of_type(response: &DnsMessage, record_type: RecordType) -> Vec<String> {
    response
        .answers
        .iter()
        .filter_map(|record| match (&record.data, record_type) {
            (RecordData::A(addr), RecordType::A) => Some(addr.to_string()),
            (RecordData::AAAA(addr), RecordType::AAAA) => Some(addr.to_string()),
            (RecordData::CNAME(target), RecordType::CNAME) => Some(trim_root(target).to_string()),
            _ => None,
        })
        .collect()
}

fn mx_values(response: &DnsMessage) -> Vec<String> {
    response
        .answers
        .iter()
        .filter_map(|record| match &record.data {
            RecordData::MX {
                preference,
                exchange,
            } => Some(format_mx(*preference, exchange)),
            _ => None,
        })
        .collect()
}

fn txt_values(response: &DnsMessage) -> Vec<String> {
    response
        .answers
        .iter()
        .filter_map(|record| match &record.data {
            RecordData::TXT(segments) => Some(condense_txt(segments)),
            _ => None,
        })
        .collect()
}
