use async_trait::async_trait;
use dnscrawler_application::ports::HostResolver;
use dnscrawler_domain::DomainError;
use std::net::IpAddr;
use tracing::debug;

/// Forward lookups through the OS resolver (`getaddrinfo`).
///
/// IPv4 addresses are listed before IPv6 ones; within a family the OS
/// order is kept and duplicates are dropped.
#[derive(Debug, Default)]
pub struct SystemHostResolver;

impl SystemHostResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemHostResolver {
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        let addrs = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|e| DomainError::HostResolution {
                host: host.to_string(),
                reason: e.to_string(),
            })?;

        let mut addresses: Vec<IpAddr> = Vec::new();
        for addr in addrs {
            if !addresses.contains(&addr.ip()) {
                addresses.push(addr.ip());
            }
        }
        addresses.sort_by_key(IpAddr::is_ipv6);

        debug!(host = %host, count = addresses.len(), "System lookup finished");
        Ok(addresses)
    }
}
