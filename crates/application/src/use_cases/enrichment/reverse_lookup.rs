use crate::ports::HostnameResolver;
use dnscrawler_domain::trim_root;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

pub struct ReverseLookupUseCase {
    hostname_resolver: Arc<dyn HostnameResolver>,
}

impl ReverseLookupUseCase {
    pub fn new(hostname_resolver: Arc<dyn HostnameResolver>) -> Self {
        Self { hostname_resolver }
    }

    /// PTR name of `ip` without the trailing dot; `None` on any failure.
    pub async fn execute(&self, ip: &str) -> Option<String> {
        let addr: IpAddr = ip.parse().ok()?;

        match self.hostname_resolver.resolve_hostname(addr).await {
            Ok(Some(hostname)) => {
                let hostname = trim_root(&hostname);
                (!hostname.is_empty()).then(|| hostname.to_string())
            }
            Ok(None) => None,
            Err(e) => {
                debug!(ip = %ip, error = %e, "Reverse lookup failed");
                None
            }
        }
    }
}
