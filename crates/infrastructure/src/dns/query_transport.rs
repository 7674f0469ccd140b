use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::UdpTransport;
use async_trait::async_trait;
use dnscrawler_application::ports::QueryTransport;
use dnscrawler_domain::endpoints::QUERY_TIMEOUT;
use dnscrawler_domain::{DnsMessage, DomainError, RecordType};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// One UDP exchange per query, bounded by a fixed timeout. Never retries.
pub struct UdpQueryTransport {
    timeout: Duration,
}

impl UdpQueryTransport {
    pub fn new() -> Self {
        Self {
            timeout: QUERY_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for UdpQueryTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryTransport for UdpQueryTransport {
    async fn query(
        &self,
        server: SocketAddr,
        name: &str,
        record_type: RecordType,
        recursion_desired: bool,
    ) -> Result<DnsMessage, DomainError> {
        let (id, bytes) = MessageBuilder::build_query(name, &record_type, recursion_desired)?;

        debug!(
            server = %server,
            name = %name,
            record_type = %record_type,
            recursion_desired,
            "Sending DNS query"
        );

        let reply = UdpTransport::new(server).send(&bytes, self.timeout).await?;
        let response = ResponseParser::parse(&reply)?;

        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} from {} does not match query ID {}",
                response.id, server, id
            )));
        }

        Ok(response)
    }
}
