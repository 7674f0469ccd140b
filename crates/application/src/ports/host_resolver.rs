use async_trait::async_trait;
use dnscrawler_domain::DomainError;
use std::net::IpAddr;

/// Forward resolution through the operating system's resolver.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, DomainError>;
}
