use async_trait::async_trait;
use dnscrawler_domain::{DnsMessage, DomainError, RecordType};
use std::net::SocketAddr;

/// Single-shot DNS exchange with one server.
///
/// Implementations send exactly one query and never retry. Timeouts,
/// refusals and undecodable responses all surface as `Err`.
#[async_trait]
pub trait QueryTransport: Send + Sync {
    async fn query(
        &self,
        server: SocketAddr,
        name: &str,
        record_type: RecordType,
        recursion_desired: bool,
    ) -> Result<DnsMessage, DomainError>;
}
